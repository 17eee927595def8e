use boxtable::width::{display_width, strip_formatting};
use boxtable::{Alignment, Config, MergeMode, Table};
use pretty_assertions::assert_eq;

fn rendered(mut table: Table<Vec<u8>>) -> String {
    table.render().expect("render into a Vec cannot fail");
    String::from_utf8(table.into_inner()).expect("output is UTF-8")
}

#[test]
fn test_people_table_with_default_config() {
    let mut table = Table::new(Vec::new());
    table.set_header(["NAME", "AGE"]);
    table.append_bulk([["Alice", "30"], ["Bob", "45"]]);

    let out = strip_formatting(&rendered(table)).into_owned();
    assert_eq!(
        out,
        "┌───────┬─────┐\n\
         │ NAME  │ AGE │\n\
         ├───────┼─────┤\n\
         │ Alice │  30 │\n\
         │ Bob   │  45 │\n\
         └───────┴─────┘\n"
    );
}

#[test]
fn test_merged_column_with_row_lines() {
    let config = Config::default()
        .with_row_line(true)
        .with_merge(MergeMode::columns([0]));
    let mut table = Table::with_config(Vec::new(), config);
    table.append_bulk([["A", "x"], ["A", "y"]]);

    assert_eq!(
        rendered(table),
        "┌───┬───┐\n\
         │ A │ x │\n\
         │   ├───┤\n\
         │   │ y │\n\
         └───┴───┘\n"
    );
}

#[test]
fn test_long_cells_wrap_at_the_configured_width() {
    let config = Config::default()
        .with_max_width(16)
        .with_auto_format_headers(false);
    let mut table = Table::with_config(Vec::new(), config);
    table.set_header(["id", "description"]);
    table.append([
        "1",
        "A table writer that wraps long descriptions onto several lines",
    ]);
    table.append(["2", "short"]);

    assert_eq!(
        rendered(table),
        "┌────┬─────────────────┐\n\
         │ id │   description   │\n\
         ├────┼─────────────────┤\n\
         │  1 │ A table writer  │\n\
         │    │ that wraps long │\n\
         │    │ descriptions    │\n\
         │    │ onto several    │\n\
         │    │ lines           │\n\
         │  2 │ short           │\n\
         └────┴─────────────────┘\n"
    );
}

#[test]
fn test_row_lines_between_every_row() {
    let config = Config::default()
        .with_row_line(true)
        .with_header_line(false)
        .with_auto_format_headers(false)
        .with_alignment(Alignment::Center);
    let mut table = Table::with_config(Vec::new(), config);
    table.set_header(["k", "value"]);
    table.append(["a", "1"]);
    table.append(["b", "22"]);

    assert_eq!(
        rendered(table),
        "┌───┬───────┐\n\
         │ k │ value │\n\
         │ a │   1   │\n\
         ├───┼───────┤\n\
         │ b │  22   │\n\
         └───┴───────┘\n"
    );
}

#[test]
fn test_wide_glyphs_keep_the_grid_aligned() {
    let mut table = Table::new(Vec::new());
    table.set_header(["城市", "人口"]);
    table.append(["北京", "21,893,095"]);
    table.append(["Zürich", "421,878"]);

    let out = rendered(table);
    let widths: Vec<usize> = out.lines().map(display_width).collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{out}");
    assert!(strip_formatting(&out).contains("│ 北京   │ 21,893,095 │"));
    assert!(strip_formatting(&out).contains("│ Zürich │    421,878 │"));
}

#[test]
fn test_tables_can_be_reused_after_clearing() {
    let mut table = Table::new(Vec::new());
    table.set_auto_format_headers(false);
    table.set_header(["name"]);
    table.append(["a much longer name"]);
    table.clear_rows();
    table.append(["x"]);
    table.render().unwrap();

    let out = String::from_utf8(table.into_inner()).unwrap();
    assert_eq!(out.lines().nth(3), Some("│ x                  │"));
    assert_eq!(out.lines().count(), 5);
}

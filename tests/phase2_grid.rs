use ipe::grid::{Direction, Grid};
use unicode_width::UnicodeWidthStr;

fn grid(direction: Direction, cells: &[String]) -> Grid {
    let mut g = Grid::new(direction, "  ");
    for c in cells {
        g.add(c.clone());
    }
    g
}

fn sample_names(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("{}{}", "file", "x".repeat(i * 7 % 13)))
        .collect()
}

// --- Width mode ---

#[test]
fn test_rows_never_exceed_width() {
    let names = sample_names(37);
    for direction in [Direction::TopToBottom, Direction::LeftToRight] {
        let g = grid(direction, &names);
        for width in [17, 20, 33, 40, 80, 120, 200] {
            let dims = g.fit_into_width(width).unwrap();
            for line in g.render(&dims).lines() {
                assert!(
                    line.width() <= width,
                    "{direction:?} width {width}: {line:?} is {} wide",
                    line.width()
                );
            }
        }
    }
}

#[test]
fn test_every_cell_rendered_exactly_once() {
    let names = sample_names(23);
    for direction in [Direction::TopToBottom, Direction::LeftToRight] {
        let g = grid(direction, &names);
        let dims = g.fit_into_width(50).unwrap();
        let mut rendered: Vec<String> = g
            .render(&dims)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let mut expected = names.clone();
        rendered.sort();
        expected.sort();
        assert_eq!(rendered, expected, "{direction:?}");
    }
}

#[test]
fn test_more_width_never_needs_more_rows() {
    let g = grid(Direction::TopToBottom, &sample_names(40));
    let mut previous = usize::MAX;
    for width in (17..200).step_by(7) {
        let rows = g.fit_into_width(width).unwrap().rows;
        assert!(rows <= previous, "width {width}: {rows} > {previous}");
        previous = rows;
    }
}

#[test]
fn test_infeasible_width_returns_none() {
    let g = grid(Direction::TopToBottom, &["a-very-long-file-name.txt".to_string()]);
    assert!(g.fit_into_width(10).is_none());
    assert_eq!(g.render_lines(), "a-very-long-file-name.txt\n");
}

#[test]
fn test_exact_fit_is_accepted() {
    let cells: Vec<String> = ["ab", "cd", "ef"].iter().map(|s| s.to_string()).collect();
    let g = grid(Direction::LeftToRight, &cells);
    // 2 + 2 + 2 + 2 * 2 separators
    let dims = g.fit_into_width(10).unwrap();
    assert_eq!(dims.columns(), 3);
    assert_eq!(g.render(&dims), "ab  cd  ef\n");
    assert_eq!(g.fit_into_width(9).unwrap().columns(), 2);
}

#[test]
fn test_row_major_fills_across() {
    let cells: Vec<String> = ["a", "bb", "ccc", "d", "ee"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let g = grid(Direction::LeftToRight, &cells);
    let dims = g.fit_into_columns(2);
    assert_eq!(dims.rows, 3);
    assert_eq!(dims.widths, vec![3, 2]);
    assert_eq!(g.render(&dims), "a    bb\nccc  d\nee\n");
}

#[test]
fn test_column_major_fills_down() {
    let cells: Vec<String> = ["a", "bb", "ccc", "d", "ee"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let g = grid(Direction::TopToBottom, &cells);
    let dims = g.fit_into_columns(2);
    assert_eq!(dims.rows, 3);
    assert_eq!(dims.widths, vec![3, 2]);
    assert_eq!(g.render(&dims), "a    d\nbb   ee\nccc\n");
}

// --- Column mode ---

#[test]
fn test_column_count_is_clamped() {
    let cells: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    let g = grid(Direction::LeftToRight, &cells);
    assert_eq!(g.fit_into_columns(0).columns(), 1);
    assert_eq!(g.fit_into_columns(9).columns(), 2);
}

#[test]
fn test_empty_grid_renders_nothing() {
    let g = Grid::new(Direction::TopToBottom, "  ");
    assert!(g.is_empty());
    assert_eq!(g.render(&g.fit_into_width(10).unwrap()), "");
    assert_eq!(g.render(&g.fit_into_columns(3)), "");
}

// --- Measured cells ---

#[test]
fn test_measured_width_drives_padding() {
    let mut g = Grid::new(Direction::LeftToRight, " ");
    g.add_measured("\u{1b}[34mab\u{1b}[0m", 2);
    g.add("c");
    g.add("d");
    let dims = g.fit_into_columns(2);
    assert_eq!(dims.widths, vec![2, 1]);
    assert_eq!(g.render(&dims), "\u{1b}[34mab\u{1b}[0m c\nd\n");
}

#[test]
fn test_wide_characters_measured_in_columns() {
    let mut g = Grid::new(Direction::LeftToRight, " ");
    g.add("日本");
    g.add("ab");
    // 4 + 1 + 2
    assert_eq!(g.fit_into_width(7).unwrap().columns(), 2);
    assert_eq!(g.fit_into_width(6).unwrap().columns(), 1);
}

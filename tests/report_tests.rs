use mazecost::config::{Config, OutputConfig};
use mazecost::input::{parse_cases, CaseSpec};
use mazecost::report::{run_cases, CaseReport};
use std::fs;

fn render_all(input: &str, output: &OutputConfig) -> String {
    let cases = parse_cases(input).expect("input parses");
    let (reports, summary) = run_cases(&cases, output);

    let mut text: String = reports.iter().map(|r| r.render(output)).collect();
    if output.show_summary {
        if let Some(line) = summary.render() {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

#[test]
fn matches_expected_output() {
    let input = fs::read_to_string("./test_data/cases.txt").unwrap();
    let expected = fs::read_to_string("./test_data/expected_output.txt").unwrap();

    assert_eq!(render_all(&input, &OutputConfig::default()), expected);
}

#[test]
fn zero_cases_print_nothing() {
    assert_eq!(render_all("0\n", &OutputConfig::default()), "");
}

#[test]
fn results_only() {
    let config = Config::parse("[output]\nshow_maze = false\nshow_summary = false\n").unwrap();
    let text = render_all("2\n1 2 1\n5 5 42\n", &config.output);
    assert_eq!(
        text,
        "Case 1: Cost = 1, Monsters = 0\n\nCase 2: Cost = 3, Monsters = 0\n\n"
    );
}

#[test]
fn route_lines() {
    let config = Config::parse("[output]\nshow_maze = false\nshow_route = true\n").unwrap();
    let text = render_all("1\n1 2 1\n", &config.output);
    assert_eq!(
        text,
        "Case 1: Cost = 1, Monsters = 0\nRoute: (0,0) -> (0,1)\n\n\
         Average Cost: 1.00, Average Monsters: 0.00\n"
    );
}

#[test]
fn json_record() {
    let report = CaseReport::run(1, CaseSpec { rows: 1, cols: 2, seed: 1 }, false);
    let json = serde_json::to_value(report.record()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "case": 1,
            "rows": 1,
            "cols": 2,
            "seed": 1,
            "start": { "row": 0, "col": 0 },
            "end": { "row": 0, "col": 1 },
            "grid": ["SE"],
            "result": { "status": "found", "cost": 1, "monsters": 0 },
        })
    );
}

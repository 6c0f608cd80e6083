use super::*;

use std::path::PathBuf;

use timeliner_fs::TimeTriple;

fn epoch_record(path: &str, size: u64, modified: f64) -> FileRecord {
    FileRecord {
        path: PathBuf::from(path),
        size,
        times: Timestamps::Epoch(TimeTriple {
            created: 0.0,
            modified,
            accessed: 86_400.0,
        }),
    }
}

#[test]
fn chart_time_converts_epoch_and_keeps_formatted() {
    let epoch = Timestamps::Epoch(TimeTriple {
        created: 1_700_000_000.5,
        modified: 0.0,
        accessed: -1.0,
    });
    assert_eq!(
        chart_time(&epoch, TimeField::Created),
        "2023-11-14 22:13:20.500"
    );
    assert_eq!(
        chart_time(&epoch, TimeField::Modified),
        "1970-01-01 00:00:00.000"
    );
    assert_eq!(
        chart_time(&epoch, TimeField::Accessed),
        "1969-12-31 23:59:59.000"
    );

    let formatted = Timestamps::Formatted(TimeTriple {
        created: "2024-05-01 10:00:00".to_owned(),
        modified: "2024-05-02 10:00:00".to_owned(),
        accessed: "2024-05-03 10:00:00".to_owned(),
    });
    assert_eq!(
        chart_time(&formatted, TimeField::Accessed),
        "2024-05-03 10:00:00"
    );
}

#[test]
fn figure_plots_size_against_selected_field() {
    let records = vec![
        epoch_record("/a.txt", 500, 3_600.0),
        epoch_record("/sub/b.txt", 10, 7_200.0),
    ];

    let fig = build_figure(&records, TimeField::Modified);
    assert_eq!(fig.data.len(), 1);

    let trace = &fig.data[0];
    assert_eq!(trace.kind, "scattergl");
    assert_eq!(trace.y, vec![500, 10]);
    assert_eq!(trace.text, vec!["/a.txt", "/sub/b.txt"]);
    assert_eq!(
        trace.x,
        vec!["1970-01-01 01:00:00.000", "1970-01-01 02:00:00.000"]
    );
    assert_eq!(
        trace.customdata[1],
        [
            "1970-01-01 00:00:00.000",
            "1970-01-01 02:00:00.000",
            "1970-01-02 00:00:00.000"
        ]
    );

    assert_eq!(fig.layout.title.text, CHART_TITLE);
    assert_eq!(fig.layout.xaxis.title.text, "Modified Time");
    assert_eq!(fig.layout.yaxis.title.text, "Size");
}

#[test]
fn hover_template_lists_every_timestamp() {
    let tpl = hover_template();
    for (i, field) in TimeField::ALL.iter().enumerate() {
        assert!(
            tpl.contains(&format!("<b>{}</b>: %{{customdata[{i}]}}", field.label())),
            "{tpl}"
        );
    }
    assert!(tpl.contains("%{text}"));
}

#[test]
fn figure_serializes_with_plotly_keys() {
    let fig = build_figure(&[epoch_record("x", 1, 1.0)], TimeField::Accessed);
    let value = serde_json::to_value(&fig).expect("serialize");

    assert_eq!(value["data"][0]["type"], "scattergl");
    assert_eq!(value["data"][0]["mode"], "markers");
    assert_eq!(value["layout"]["xaxis"]["type"], "date");
    assert!(value["layout"]["yaxis"].get("type").is_none());
    assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Access Time");
}

#[test]
fn html_embeds_figure_and_escapes_script_close() {
    let fig = build_figure(
        &[epoch_record("/tmp/</script><b>.txt", 1, 1.0)],
        TimeField::Created,
    );
    let html = render_html(&fig).expect("render");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(PLOTLY_CDN));
    assert!(html.contains("Plotly.newPlot"));
    assert_eq!(html.matches("</script>").count(), 2, "{html}");
    assert!(html.contains("<\\/script>"));
}

#[test]
fn render_chart_writes_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let out = tmp.path().join("timeline.html");

    render_chart(&out, &[epoch_record("a", 1, 1.0)], TimeField::Modified).expect("render");

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("\"scattergl\""));
}

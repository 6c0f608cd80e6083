//! Size-over-time scatter chart, rendered as a standalone Plotly HTML page.

use std::{fs, io, path::Path};

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use timeliner_fs::{FileRecord, TimeField, Timestamps};

pub const CHART_TITLE: &str = "File Timeline";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const CHART_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    /// Selected timestamp of each file, as a date string.
    pub x: Vec<String>,
    /// File sizes in bytes.
    pub y: Vec<u64>,
    /// File paths, shown on hover.
    pub text: Vec<String>,
    /// All three timestamps per point, in column order.
    pub customdata: Vec<[String; 3]>,
    pub hovertemplate: String,
    pub marker: Marker,
}

#[derive(Debug, Serialize)]
pub struct Marker {
    pub color: &'static str,
    pub opacity: f64,
    pub line: MarkerLine,
}

#[derive(Debug, Serialize)]
pub struct MarkerLine {
    pub color: &'static str,
    pub width: u32,
}

#[derive(Debug, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

fn title(text: &str) -> Title {
    Title {
        text: text.to_owned(),
    }
}

/// Date string Plotly can place on a date axis.
fn chart_time(times: &Timestamps, field: TimeField) -> String {
    match times {
        Timestamps::Formatted(t) => t.get(field).clone(),
        Timestamps::Epoch(t) => {
            let secs = *t.get(field);
            DateTime::<Utc>::from_timestamp_millis((secs * 1000.0).round() as i64)
                .map(|dt| dt.format(CHART_TIME_FORMAT).to_string())
                .unwrap_or_else(|| secs.to_string())
        }
    }
}

fn hover_template() -> String {
    let mut tpl = String::from("<b>Path</b>: %{text}<br><b>Size</b>: %{y}<br>");
    for (i, field) in TimeField::ALL.iter().enumerate() {
        tpl.push_str(&format!("<b>{}</b>: %{{customdata[{i}]}}<br>", field.label()));
    }
    tpl.push_str("<extra></extra>");
    tpl
}

/// Scatter of size against `field`, one point per record.
pub fn build_figure(records: &[FileRecord], field: TimeField) -> Figure {
    let trace = Trace {
        kind: "scattergl",
        mode: "markers",
        x: records.iter().map(|r| chart_time(&r.times, field)).collect(),
        y: records.iter().map(|r| r.size).collect(),
        text: records
            .iter()
            .map(|r| r.path.to_string_lossy().into_owned())
            .collect(),
        customdata: records
            .iter()
            .map(|r| TimeField::ALL.map(|f| chart_time(&r.times, f)))
            .collect(),
        hovertemplate: hover_template(),
        marker: Marker {
            color: "rgba(135, 206, 250, 0.5)",
            opacity: 0.8,
            line: MarkerLine {
                color: "MediumPurple",
                width: 1,
            },
        },
    };

    Figure {
        data: vec![trace],
        layout: Layout {
            title: title(CHART_TITLE),
            xaxis: Axis {
                title: title(field.label()),
                kind: Some("date"),
            },
            yaxis: Axis {
                title: title("Size"),
                kind: None,
            },
        },
    }
}

pub fn render_html(figure: &Figure) -> io::Result<String> {
    // A path containing "</script>" must not end the script block early.
    let json = serde_json::to_string(figure)
        .map_err(io::Error::other)?
        .replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{CHART_TITLE}</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="timeline" style="width:100%;height:95vh;"></div>
<script>
const figure = {json};
Plotly.newPlot("timeline", figure.data, figure.layout);
</script>
</body>
</html>
"#
    ))
}

/// Write the chart for `records` to `path`, replacing any previous chart.
pub fn render_chart(path: &Path, records: &[FileRecord], field: TimeField) -> io::Result<()> {
    let html = render_html(&build_figure(records, field))?;
    fs::write(path, html)?;

    debug!("[chart] {} points written to {:?}", records.len(), path);

    Ok(())
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;

//! Rendering for the mounted form: field list, focus highlight, required
//! hints, and the simulated upload gauge.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::forms::{FieldValue, FormState};

fn value_spans(value: &FieldValue, focused: bool) -> Vec<Span<'static>> {
    let style = if focused {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    match value {
        FieldValue::Text(s) => {
            let shown = if focused {
                format!("{s}▏")
            } else {
                s.clone()
            };
            vec![Span::styled(shown, style)]
        }
        FieldValue::Secret(s) => {
            let mask = "•".repeat(s.chars().count());
            let shown = if focused { format!("{mask}▏") } else { mask };
            vec![Span::styled(shown, style)]
        }
        FieldValue::Toggle(on) => {
            let label = if *on { "[x] Activado" } else { "[ ] Desactivado" };
            vec![Span::styled(label.to_string(), style)]
        }
        FieldValue::Select { options, index } => {
            let label = options.get(*index).copied().unwrap_or("");
            vec![Span::styled(format!("‹ {label} ›"), style)]
        }
    }
}

/// Render the form into `area`. Each field takes a label line and a value
/// line; blank required fields show the obligatory-field hint.
pub fn render_form(f: &mut Frame, area: Rect, form: &FormState, upload: Option<u8>) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focus;
        let marker = if focused { "› " } else { "  " };
        let required = if field.required { " *" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{marker}{}{required}", field.label),
                Style::default()
                    .fg(if focused { Color::Green } else { Color::Gray })
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        let mut value_line = vec![Span::raw("    ")];
        value_line.extend(value_spans(&field.value, focused));
        if field.missing() {
            value_line.push(Span::styled(
                "  Este campo es obligatorio para continuar",
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(value_line));
    }

    let form_height = inner.height.saturating_sub(if upload.is_some() { 2 } else { 0 });
    f.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, inner.width, form_height),
    );

    if let Some(progress) = upload {
        let gauge_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
        let label = if crate::logic::ui::upload_complete(progress) {
            "Carga completa".to_string()
        } else {
            format!("Subiendo… {progress}%")
        };
        f.render_widget(
            Gauge::default()
                .ratio(f64::from(progress.min(100)) / 100.0)
                .label(label)
                .gauge_style(Style::default().fg(Color::Green)),
            gauge_area,
        );
    }
}

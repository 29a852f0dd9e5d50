use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

use tempgrid_shared::domain::{Month, MONTHS};
use tempgrid_shared::extent::Extents;
use tempgrid_shared::model::Dataset;
use tempgrid_shared::scale::{BandScale, LinearScale, QuantizeScale, Rgb, TimeScale, PALETTE};

const DATASET_PATH: &str = "global-temperature.json";

struct Loaded {
    dataset: Dataset,
    extents: Extents,
    lookup: HashMap<(i32, u32), usize>,
}

impl Loaded {
    fn record(&self, year: i32, month: Month) -> Option<&tempgrid_shared::TemperatureRecord> {
        self.lookup
            .get(&(year, month.number()))
            .map(|index| &self.dataset.monthly_variance[*index])
    }
}

fn main() -> io::Result<()> {
    let data = Rc::new(RefCell::new(None::<Loaded>));
    // cell cursor: (year index, month index)
    let cursor = Rc::new(RefCell::new((0_usize, 0_usize)));

    spawn_local(fetch_dataset(data.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let cursor = cursor.clone();
        move |event| match event.code {
            ratzilla::event::KeyCode::Left => {
                let mut cursor = cursor.borrow_mut();
                cursor.0 = cursor.0.saturating_sub(1);
            }
            ratzilla::event::KeyCode::Right => {
                let mut cursor = cursor.borrow_mut();
                cursor.0 = cursor.0.saturating_add(1);
            }
            ratzilla::event::KeyCode::Up => {
                let mut cursor = cursor.borrow_mut();
                cursor.1 = (cursor.1 + 11) % 12;
            }
            ratzilla::event::KeyCode::Down => {
                let mut cursor = cursor.borrow_mut();
                cursor.1 = (cursor.1 + 1) % 12;
            }
            _ => {}
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Global Temperature Heatmap")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let data = data.borrow();
        if let Some(loaded) = data.as_ref() {
            let cursor = *cursor.borrow();
            render_heatmap(loaded, cursor, f, inner);
        } else {
            let paragraph =
                Paragraph::new(Text::from(TextLine::from("Loading global-temperature.json...")))
                    .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    });

    Ok(())
}

fn render_heatmap(
    loaded: &Loaded,
    cursor: (usize, usize),
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // base temperature label
            Constraint::Min(12),   // chart
            Constraint::Length(1), // year axis
            Constraint::Length(2), // legend
            Constraint::Length(3), // inspected cell
        ])
        .split(area);

    render_header(loaded, f, main_layout[0]);

    let chart = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(11), Constraint::Min(10)])
        .split(main_layout[1]);

    let year_count = loaded.extents.year_count();
    let year_index = cursor.0.min(year_count - 1);
    let selected_year = loaded.extents.min_year + clamp_to_i32(year_index);
    let selected_month = Month::from_index(cursor.1).unwrap_or(Month::January);

    render_month_gutter(f, chart[0]);
    render_grid(loaded, (selected_year, selected_month), f, chart[1]);

    let axis_area = Rect {
        x: chart[1].x,
        y: main_layout[2].y,
        width: chart[1].width,
        height: main_layout[2].height,
    };
    render_year_axis(&loaded.extents, f, axis_area);
    render_legend(&loaded.extents, f, main_layout[3]);
    render_inspector(loaded, (selected_year, selected_month), f, main_layout[4]);
}

#[allow(clippy::cast_possible_truncation)]
fn clamp_to_i32(value: usize) -> i32 {
    value.min(i32::MAX as usize) as i32
}

fn render_header(loaded: &Loaded, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled("Base temperature: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2} \u{b0}C", loaded.dataset.base_temperature),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   {} - {}, {} records   (arrows move the cell cursor)",
                loaded.extents.min_year,
                loaded.extents.max_year,
                loaded.dataset.monthly_variance.len()
            ),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(Text::from(line)).alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_month_gutter(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    if area.width < 4 || area.height == 0 {
        return;
    }

    let band = BandScale::months(0.0, f64::from(area.height));
    let label_width = (area.width - 1) as usize;

    let mut rows = vec![String::new(); area.height as usize];
    for month in MONTHS {
        let row = band.band_start(month.index()).round().max(0.0) as usize;
        if let Some(slot) = rows.get_mut(row) {
            *slot = format!("{name:>label_width$} ", name = month.name());
        }
    }

    let lines: Vec<TextLine<'_>> = rows.into_iter().map(TextLine::from).collect();
    let paragraph = Paragraph::new(Text::from(lines)).style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

const fn palette_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn render_grid(
    loaded: &Loaded,
    selected: (i32, Month),
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    if area.width < 12 || area.height < 12 {
        let paragraph = Paragraph::new("Viewport too small for the heatmap")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let quantize = QuantizeScale::from_extents(&loaded.extents);
    let time = TimeScale::new(&loaded.extents, 0.0, f64::from(area.width));
    let band = BandScale::months(0.0, f64::from(area.height));

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let month = band
            .index_at(f64::from(row) + 0.5)
            .and_then(Month::from_index);

        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let year = time.year_at(f64::from(col) + 0.5);

            let record = match (year, month) {
                (Some(year), Some(month)) => {
                    loaded.record(year, month).map(|record| (year, month, record))
                }
                _ => None,
            };

            let span = match record {
                Some((year, month, record)) => {
                    let color =
                        palette_color(quantize.color(loaded.dataset.temperature(record)));
                    if (year, month) == selected {
                        Span::styled(
                            "\u{2588}",
                            Style::default()
                                .fg(Color::White)
                                .bg(color)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(" ", Style::default().bg(color))
                    }
                }
                None => Span::styled("\u{b7}", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        lines.push(TextLine::from(spans));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_year_axis(extents: &Extents, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let time = TimeScale::new(extents, 0.0, f64::from(area.width));
    let span = extents.max_year - extents.min_year;
    let step = [1, 2, 5, 10, 20, 25, 50, 100]
        .into_iter()
        .find(|step| (span / step + 1) * 6 <= i32::from(area.width))
        .unwrap_or(100);

    let mut row = vec![' '; area.width as usize];
    let mut next_free = 0_usize;
    let mut year = extents.min_year.div_euclid(step) * step;
    if year < extents.min_year {
        year += step;
    }
    while year <= extents.max_year {
        let label = year.to_string();
        let x = time.map_year(year).round().max(0.0) as usize;
        if x >= next_free && x + label.len() <= row.len() {
            for (offset, ch) in label.chars().enumerate() {
                row[x + offset] = ch;
            }
            next_free = x + label.len() + 1;
        }
        year += step;
    }

    let paragraph = Paragraph::new(row.into_iter().collect::<String>())
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_legend(extents: &Extents, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let swatch_count = PALETTE.len() as u16;
    if area.width < swatch_count || area.height < 2 {
        return;
    }

    let legend_width = area.width.min(swatch_count * 5);
    let swatch_width = legend_width / swatch_count;

    let swatches = TextLine::from(
        PALETTE
            .into_iter()
            .map(|rgb| {
                Span::styled(
                    " ".repeat(swatch_width as usize),
                    Style::default().bg(palette_color(rgb)),
                )
            })
            .collect::<Vec<_>>(),
    );

    let quantize = QuantizeScale::from_extents(extents);
    let ticks = quantize.legend_ticks();
    let total_width = swatch_width * swatch_count;
    let linear = LinearScale::new(
        extents.min_temp,
        extents.max_temp,
        0.0,
        f64::from(total_width),
    );

    let mut row = vec![' '; total_width as usize];
    let mut next_free = 0_usize;
    for tick in ticks {
        let label = format!("{tick:.1}");
        let start = (linear.map(tick).round().max(0.0) as usize)
            .saturating_sub(label.len() / 2)
            .min(row.len().saturating_sub(label.len()));
        if start >= next_free {
            for (offset, ch) in label.chars().enumerate() {
                row[start + offset] = ch;
            }
            next_free = start + label.len() + 1;
        }
    }

    let lines = vec![
        swatches,
        TextLine::styled(
            row.into_iter().collect::<String>(),
            Style::default().fg(Color::Gray),
        ),
    ];
    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// The web rendition of the tooltip: a fixed inspector box for the record
/// under the cell cursor.
fn render_inspector(
    loaded: &Loaded,
    selected: (i32, Month),
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let record = loaded.record(selected.0, selected.1);

    let line = record.map_or_else(
        || {
            TextLine::from(Span::styled(
                format!("{} - {}: no record", selected.0, selected.1.name()),
                Style::default().fg(Color::Gray),
            ))
        },
        |record| {
            let (heading, body) = loaded.dataset.tooltip_lines(record);
            TextLine::from(vec![
                Span::styled(
                    heading,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(body, Style::default().fg(Color::Yellow)),
            ])
        },
    );

    let paragraph = Paragraph::new(Text::from(line)).block(block);
    f.render_widget(paragraph, area);
}

async fn fetch_dataset(store: Rc<RefCell<Option<Loaded>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init(DATASET_PATH, &opts) else {
        return;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        web_sys::console::error_1(&"Error loading data: fetch failed".into());
        return;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Error loading data: unreadable response".into());
        return;
    };

    let Ok(body_promise) = response.json() else {
        web_sys::console::error_1(&"Error loading data: response is not JSON".into());
        return;
    };
    let Ok(json) = wasm_bindgen_futures::JsFuture::from(body_promise).await else {
        web_sys::console::error_1(&"Error loading data: failed to read body".into());
        return;
    };

    let dataset = match serde_wasm_bindgen::from_value::<Dataset>(json) {
        Ok(dataset) => dataset,
        Err(error) => {
            web_sys::console::error_1(&format!("Error loading data: {error}").into());
            return;
        }
    };

    if let Err(error) = dataset.validate() {
        web_sys::console::error_1(&format!("Error loading data: {error}").into());
        return;
    }

    let extents = match Extents::from_dataset(&dataset) {
        Ok(extents) => extents,
        Err(error) => {
            web_sys::console::error_1(&format!("Error loading data: {error}").into());
            return;
        }
    };

    let lookup = dataset
        .monthly_variance
        .iter()
        .enumerate()
        .map(|(index, record)| ((record.year, record.month), index))
        .collect();

    *store.borrow_mut() = Some(Loaded {
        dataset,
        extents,
        lookup,
    });
}

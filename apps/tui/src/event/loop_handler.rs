use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use tempgrid_shared::Month;

use crate::app::{handle_input, handle_mouse, App};
use crate::ui;

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    let frame = terminal
                        .size()
                        .map_or_else(|_| Rect::default(), |size| Rect::new(0, 0, size.width, size.height));
                    handle_mouse(app, mouse, frame);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore focus and paste events
                }
            }
        }
    }

    Ok(())
}

/// Run without a UI: print dataset stats and exit
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    if json {
        render_headless_json(app)
    } else {
        render_headless_stats(app)
    }
}

fn render_headless_stats(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);

    println!("\nGlobal Temperature Dataset");
    println!("==========================");
    println!("Base temperature: {:.2} \u{b0}C", stats.base_temperature);
    println!("Records: {}", stats.record_count);
    println!("Years: {} - {}", stats.min_year, stats.max_year);
    println!(
        "Temperature range: {:.2} \u{b0}C - {:.2} \u{b0}C",
        stats.min_temp, stats.max_temp
    );

    if let Some(coldest) = stats.coldest {
        println!(
            "\nColdest month: {} {} ({:.2} \u{b0}C)",
            coldest.month, coldest.year, coldest.temperature
        );
    }
    if let Some(hottest) = stats.hottest {
        println!(
            "Hottest month: {} {} ({:.2} \u{b0}C)",
            hottest.month, hottest.year, hottest.temperature
        );
    }

    Ok(())
}

fn render_headless_json(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let dataset = &app.dataset;

    let extreme = |pick_max: bool| {
        dataset
            .monthly_variance
            .iter()
            .reduce(|best, candidate| {
                let better = if pick_max {
                    candidate.variance > best.variance
                } else {
                    candidate.variance < best.variance
                };
                if better {
                    candidate
                } else {
                    best
                }
            })
            .map(|record| HeadlessRecord {
                year: record.year,
                month: Month::from_number(record.month)
                    .map_or("?", Month::name)
                    .to_string(),
                temperature: dataset.temperature(record),
            })
    };

    HeadlessStats {
        generated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        base_temperature: dataset.base_temperature,
        record_count: dataset.monthly_variance.len(),
        min_year: app.extents.min_year,
        max_year: app.extents.max_year,
        min_temp: app.extents.min_temp,
        max_temp: app.extents.max_temp,
        coldest: extreme(false),
        hottest: extreme(true),
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    generated: String,
    base_temperature: f64,
    record_count: usize,
    min_year: i32,
    max_year: i32,
    min_temp: f64,
    max_temp: f64,
    coldest: Option<HeadlessRecord>,
    hottest: Option<HeadlessRecord>,
}

#[derive(serde::Serialize)]
struct HeadlessRecord {
    year: i32,
    month: String,
    temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempgrid_shared::{Dataset, TemperatureRecord};

    fn record(year: i32, month: u32, variance: f64) -> TemperatureRecord {
        TemperatureRecord {
            year,
            month,
            variance,
        }
    }

    #[test]
    fn headless_stats_summarize_the_dataset() {
        let app = App::new(Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                record(1900, 1, -1.5),
                record(1950, 7, 2.0),
                record(2000, 3, 0.5),
            ],
        })
        .unwrap();

        let stats = build_headless_stats(&app);
        assert_eq!(stats.record_count, 3);
        assert_eq!((stats.min_year, stats.max_year), (1900, 2000));
        assert!((stats.min_temp - 6.5).abs() < f64::EPSILON);
        assert!((stats.max_temp - 10.0).abs() < f64::EPSILON);

        let coldest = stats.coldest.unwrap();
        assert_eq!((coldest.year, coldest.month.as_str()), (1900, "January"));
        let hottest = stats.hottest.unwrap();
        assert_eq!((hottest.year, hottest.month.as_str()), (1950, "July"));
    }
}

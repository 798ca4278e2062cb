use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use glyph_core::persistence::{load_dictionary_or_new, save_dictionary};
use glyph_core::{Dictionary, GridPoint, InputPad, PadConfig, PadEvent, Symbol};
use log::{LevelFilter, Log, Metadata, Record};
use std::cell::Cell;
use std::fs::File;
use std::io::{self, stdin, stdout, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

const CONFIG_PATH: &str = "glyph_pad.json";
const DEFAULT_DICTIONARY_PATH: &str = "glyph_dictionary.bin";

/// Appends log records to a file under `target/`.
struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn init_logging() {
    let path = PathBuf::from("target").join("glyph_pad.log");
    let _ = std::fs::create_dir_all("target");
    if let Ok(file) = File::create(&path) {
        let logger = Box::new(FileLogger { file: Mutex::new(file) });
        if log::set_boxed_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    }
}

fn main() -> io::Result<()> {
    init_logging();
    log::info!("--- glyph pad starting ---");

    let config = PadConfig::load(Path::new(CONFIG_PATH)).unwrap_or_else(|e| {
        log::warn!("bad config {}: {}", CONFIG_PATH, e);
        PadConfig::default()
    });
    let dictionary_path = config
        .dictionary_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY_PATH));

    // Only a dictionary that was actually loaded (or absent) may be saved back.
    let (mut dictionary, save_on_exit) = match load_dictionary_or_new(&dictionary_path) {
        Ok(dictionary) => (dictionary, true),
        Err(e) => {
            eprintln!(
                "[ERROR] Could not read dictionary '{}': {}. Changes will not be saved.",
                dictionary_path.display(),
                e
            );
            log::error!("dictionary load failed, saving disabled: {}", e);
            (Dictionary::<String>::new(), false)
        }
    };
    let mut pad = InputPad::with_config(&config);

    let strokes = Rc::new(Cell::new(0u32));
    let stroke_counter = Rc::clone(&strokes);
    pad.subscribe(move |event, draft| match event {
        PadEvent::SymbolChanged => log::debug!("symbol now {}", draft),
        PadEvent::StrokeEnded => stroke_counter.set(stroke_counter.get() + 1),
    });

    let mut status = String::new();
    loop {
        print_ui(&pad, &dictionary, strokes.get(), &status)?;
        status.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or("");

        match command {
            "exit" | "quit" => break,
            "draw" => {
                let points: Vec<GridPoint> = words.filter_map(|w| w.parse().ok()).collect();
                if !pad.begin_gesture(None) {
                    status = "Stroke limit reached.".to_string();
                    continue;
                }
                for point in points {
                    pad.point_moved(Some(point));
                }
                pad.end_gesture();
            }
            "undo" => {
                status = match pad.remove_last_connection() {
                    Some(c) => format!("Removed {}-{}.", c.a(), c.b()),
                    None => "Nothing to undo.".to_string(),
                };
            }
            "clear" => pad.clear_symbol(),
            "load" => {
                let code = words.next().unwrap_or("");
                pad.set_symbol(&Symbol::from(code));
            }
            "limit" => {
                if let Some(n) = words.next().and_then(|w| w.parse::<i64>().ok()) {
                    pad.set_stroke_limit(n);
                }
            }
            "learn" => {
                let value = words.collect::<Vec<_>>().join(" ");
                let symbol = pad.symbol();
                status = if value.is_empty() || symbol.is_empty() {
                    "Draw a symbol and give it a meaning: learn <text>".to_string()
                } else if dictionary.contains(&symbol) {
                    "That symbol is already registered.".to_string()
                } else {
                    dictionary.insert(symbol, value.clone());
                    pad.clear_symbol();
                    format!("Learned '{}'.", value)
                };
            }
            "" | "lookup" => {}
            other => status = format!("Unknown command '{}'.", other),
        }
    }

    if save_on_exit {
        println!("\nSaving dictionary...");
        match save_dictionary(&dictionary, &dictionary_path) {
            Ok(()) => println!("Dictionary saved to '{}'", dictionary_path.display()),
            Err(e) => eprintln!("[ERROR] Could not save dictionary: {}", e),
        }
    } else {
        println!("\nDictionary was not loaded; leaving '{}' untouched.", dictionary_path.display());
    }
    log::logger().flush();
    Ok(())
}

fn print_ui(
    pad: &InputPad,
    dictionary: &Dictionary<String>,
    strokes: u32,
    status: &str,
) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Glyph Pad".bold());
    println!("---------------------------------------------------------------");
    println!("draw <p> <p> ... | undo | clear | load <code> | limit <n>");
    println!("learn <text> | exit. Grid points are 0-10.\n");

    let symbol = pad.symbol();
    println!("Strokes: {}  Remaining: {}", strokes, pad.stroke_limit());
    println!("Drawn:   [{}]", pad.draft());
    println!("Symbol:  [{}]", symbol);

    match dictionary.get(&symbol) {
        Some(value) if !symbol.is_empty() => println!("\nRecognized: {}", value.as_str().green()),
        _ => println!("\nNo match ({} known symbols).", dictionary.entry_count()),
    }
    if !status.is_empty() {
        println!("{}", status.yellow());
    }
    print!("\n> ");
    out.flush()
}

use serde::Serialize;

use moarse_core::symbol::{parse_symbols, render, render_ascii};
use moarse_core::{decode, encode_report, AlphabetTable};

use super::die;

#[derive(Serialize)]
struct EncodeOutput {
    code: String,
    dropped: Vec<String>,
}

#[derive(Serialize)]
struct TableEntry {
    character: char,
    code: String,
}

pub fn encode(text: &str, glyphs: bool, json: bool) {
    let report = encode_report(text);
    let code = if glyphs {
        render(&report.symbols)
    } else {
        render_ascii(&report.symbols)
    };
    if json {
        let out = EncodeOutput {
            code,
            dropped: report.dropped,
        };
        println!("{}", die!(serde_json::to_string(&out), "Error: {}"));
        return;
    }
    println!("{}", code.trim_end());
    if !report.dropped.is_empty() {
        let dropped = report.dropped.concat();
        eprintln!("dropped (no code): {dropped:?}");
    }
}

pub fn decode_code(code: &str) {
    let symbols = die!(parse_symbols(code), "Error: {}");
    println!("{}", decode(&symbols));
}

pub fn table(json: bool) {
    let table = AlphabetTable::global();
    if json {
        let entries: Vec<TableEntry> = table
            .entries()
            .map(|(character, code)| TableEntry {
                character,
                code: code.to_string(),
            })
            .collect();
        println!("{}", die!(serde_json::to_string_pretty(&entries), "Error: {}"));
        return;
    }
    for (ch, code) in table.entries() {
        println!("{ch}\t{code}");
    }
}

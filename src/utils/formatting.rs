//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return s.to_string();
    }
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        "" // zero → nessun segno
    };

    if short {
        // es: +02:25 oppure -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: +02h 25m oppure -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Colore ANSI per il tipo di giorno.
pub fn day_type_color(day_type: &crate::models::day_type::DayType) -> &'static str {
    use crate::models::day_type::DayType;
    match day_type {
        DayType::Work => "\x1b[34m",
        DayType::Weekend => "\x1b[90m",
        DayType::Sick => "\x1b[33m",
        DayType::Holiday => "\x1b[45;97;1m",
        DayType::Vacation => "\x1b[36m",
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation helpers for the single supported locale (`id-ID`).

use pesan_domain::Price;
use time::{Date, Month, Weekday};

/// Formats an amount as Indonesian rupiah, e.g. `Rp 2.000.000`.
///
/// Thousands are grouped with `.` and no fraction digits are shown.
#[must_use]
pub fn format_idr(price: Price) -> String {
    let digits: String = price.amount().to_string();
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("Rp {grouped}")
}

/// Formats a date the way the date picker labels it, e.g.
/// `Jumat, 16 Oktober 2026`.
#[must_use]
pub fn format_date_indonesian(date: Date) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// Room count label used on the checkout bar, e.g. `3 Kamar`.
#[must_use]
pub fn format_room_count(rooms: u32) -> String {
    format!("{rooms} Kamar")
}

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Senin",
        Weekday::Tuesday => "Selasa",
        Weekday::Wednesday => "Rabu",
        Weekday::Thursday => "Kamis",
        Weekday::Friday => "Jumat",
        Weekday::Saturday => "Sabtu",
        Weekday::Sunday => "Minggu",
    }
}

const fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}

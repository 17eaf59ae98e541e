//! iCalendar text rendering for vessel timelines.
//!
//! One VEVENT per non-available range. Range dates are inclusive on both
//! ends; calendar events use an exclusive end, so DTEND is the day after
//! the range's last day. Output is deterministic for a given timeline so
//! republishing an unchanged season produces byte-identical files.

use chrono::NaiveDate;
use slipcal_types::{DayStatus, StatusRange, VesselTimeline};

const CRLF: &str = "\r\n";

/// Render a timeline as an iCalendar document.
#[must_use]
pub fn render(timeline: &VesselTimeline) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, "PRODID:-//slipcal//slipcal//EN");
    push_line(&mut out, "CALSCALE:GREGORIAN");
    push_line(
        &mut out,
        &format!("X-WR-CALNAME:{} Availability", escape(&timeline.vessel.name)),
    );
    for range in &timeline.ranges {
        if range.status == DayStatus::Available {
            continue;
        }
        push_event(&mut out, timeline, range);
    }
    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_event(out: &mut String, timeline: &VesselTimeline, range: &StatusRange) {
    push_line(out, "BEGIN:VEVENT");
    push_line(
        out,
        &format!(
            "UID:{}-{}-{}@slipcal",
            timeline.vessel.id,
            date_stamp(range.start),
            range.status.as_str()
        ),
    );
    push_line(out, &format!("DTSTAMP:{}T000000Z", date_stamp(range.start)));
    push_line(
        out,
        &format!("DTSTART;VALUE=DATE:{}", date_stamp(range.start)),
    );
    push_line(
        out,
        &format!("DTEND;VALUE=DATE:{}", date_stamp(range.exclusive_end())),
    );
    push_line(
        out,
        &format!(
            "SUMMARY:{} - {}",
            escape(&timeline.vessel.name),
            range.status.label()
        ),
    );
    push_line(out, "END:VEVENT");
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(CRLF);
}

fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

// RFC 5545 TEXT escaping; vessel names occasionally carry commas.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

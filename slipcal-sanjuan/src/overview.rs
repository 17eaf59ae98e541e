//! Extraction of vessel rows from the San Juan Sailing overview page.
//!
//! The page is one large table: each vessel is a `<tr>` whose first cell
//! (`class="fixedcol-a"`) carries the vessel name and detail link, followed
//! by one `<td class="Cbg…">` per day of the displayed month. The markup is
//! machine-generated and shallow, so a tag-block walk is simpler and more
//! robust here than a full DOM parse.

use slipcal_types::{Observation, Period, SlipcalError, StatusPolicy, Vessel, VesselId};

/// One parsed vessel row: the vessel plus the raw day-cell classes in
/// column order (first entry = day 1 of the displayed month).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    /// Vessel listed in the row's fixed column.
    pub vessel: Vessel,
    /// Raw `class` attribute of each day cell, in day order.
    pub day_classes: Vec<String>,
}

impl OverviewRow {
    /// Map this row's day cells onto dated observations for `period`
    /// through the given status policy. Cells the policy drops produce no
    /// observation; a row with more day cells than the month has days is a
    /// shape violation.
    ///
    /// # Errors
    /// Returns `Parse` when the row carries more day cells than `period`
    /// has days.
    pub fn observations_for(
        &self,
        period: Period,
        policy: &StatusPolicy,
    ) -> Result<Vec<Observation>, SlipcalError> {
        let mut observations = Vec::new();
        let mut date = period.first_day();
        let last = period.last_day();
        for (idx, class) in self.day_classes.iter().enumerate() {
            if date > last {
                return Err(SlipcalError::Parse(format!(
                    "row for {} has {} day cells but {period} has only {} days",
                    self.vessel.name,
                    self.day_classes.len(),
                    idx
                )));
            }
            match policy.classify(class) {
                Some(status) => observations.push(Observation::new(date, status)),
                None => {
                    tracing::debug!(class = %class, day = idx + 1, "dropping unmapped day cell");
                }
            }
            date = date.succ_opt().unwrap_or(date);
        }
        Ok(observations)
    }

    /// Identifier of the row's vessel.
    #[must_use]
    pub const fn vessel_id(&self) -> &VesselId {
        &self.vessel.id
    }
}

/// Parse every vessel row out of an overview page.
///
/// Rows without a fixed vessel column, or without a name link inside it,
/// are skipped with a warning; the vendor interleaves header and spacer
/// rows with the fleet.
///
/// # Errors
/// Returns `Parse` when the document contains no table rows at all.
pub fn parse(html: &str) -> Result<Vec<OverviewRow>, SlipcalError> {
    let mut rows = Vec::new();
    let mut saw_tr = false;

    let mut pos = 0usize;
    while let Some((tr_start, tr_end)) = next_block(html, "<tr", "</tr>", pos) {
        saw_tr = true;
        let tr = &html[tr_start..tr_end];
        pos = tr_end;

        let mut vessel: Option<Vessel> = None;
        let mut day_classes: Vec<String> = Vec::new();

        let mut td_pos = 0usize;
        while let Some((td_start, td_end)) = next_block(tr, "<td", "</td>", td_pos) {
            let td = &tr[td_start..td_end];
            td_pos = td_end;

            let class = attr(td, "class").unwrap_or_default();
            if class.split_ascii_whitespace().any(|c| c == "fixedcol-a") {
                match vessel_from_cell(td) {
                    Some(v) => vessel = Some(v),
                    None => {
                        tracing::warn!("skipping row; no link found in vessel cell");
                    }
                }
            } else if !class.is_empty() {
                day_classes.push(class);
            }
        }

        match vessel {
            Some(vessel) => {
                tracing::debug!(vessel = %vessel.name, days = day_classes.len(), "parsed row");
                rows.push(OverviewRow {
                    vessel,
                    day_classes,
                });
            }
            None => {
                tracing::warn!("skipping row without vessel information");
            }
        }
    }

    if !saw_tr {
        return Err(SlipcalError::Parse(
            "overview page contains no table rows".to_string(),
        ));
    }
    Ok(rows)
}

fn vessel_from_cell(td: &str) -> Option<Vessel> {
    let (a_start, a_end) = next_block(td, "<a", "</a>", 0)?;
    let a = &td[a_start..a_end];
    let name = strip_tags(inner_text(a));
    if name.is_empty() {
        return None;
    }
    let mut vessel = Vessel::named(name);
    if let Some(href) = attr(a, "href") {
        vessel = vessel.with_detail_url(href);
    }
    Some(vessel)
}

// -- minimal tag-walk helpers; the vendor markup is flat enough that
//    balanced nesting never occurs inside the blocks we scan. --

fn next_block(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lower = s.to_ascii_lowercase();
    let start = lower.get(from..)?.find(open)? + from;
    // The open pattern must be a full tag name, not a prefix of another.
    let after_name = s.as_bytes().get(start + open.len()).copied();
    if let Some(b) = after_name
        && !(b == b'>' || b.is_ascii_whitespace() || b == b'/')
    {
        return next_block(s, open, close, start + open.len());
    }
    let open_end = s[start..].find('>')? + start + 1;
    let close_rel = lower[open_end..].find(close)?;
    let end = open_end + close_rel + close.len();
    Some((start, end))
}

fn inner_text(block: &str) -> &str {
    let Some(open_end) = block.find('>') else {
        return "";
    };
    let Some(close_start) = block.rfind('<') else {
        return "";
    };
    if close_start <= open_end {
        return "";
    }
    &block[open_end + 1..close_start]
}

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn attr(tag_block: &str, name: &str) -> Option<String> {
    let open_end = tag_block.find('>')?;
    let open_tag = &tag_block[..open_end];
    let lower = open_tag.to_ascii_lowercase();
    let needle = format!("{name}=");
    let at = lower.find(&needle)? + needle.len();
    let rest = &open_tag[at..];
    let (value, _) = match rest.as_bytes().first() {
        Some(b'"') => rest[1..].split_once('"')?,
        Some(b'\'') => rest[1..].split_once('\'')?,
        _ => (
            rest.split_whitespace().next().unwrap_or(""),
            "",
        ),
    };
    Some(value.to_string())
}

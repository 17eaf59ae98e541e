use slipcal_sanjuan::overview;
use slipcal_types::{DayStatus, Period, StatusPolicy, VesselId};

const PAGE: &str = r#"
<html><body>
<table>
  <tr>
    <th>Vessel</th><th>1</th><th>2</th><th>3</th><th>4</th>
  </tr>
  <tr>
    <td class="fixedcol-a"><a href="a-vesseldetail.asp?id=42">Selkie</a></td>
    <td class="CbgT">1</td>
    <td class="CbgWE">2</td>
    <td class="CbgM">3</td>
    <td class="CbgM">4</td>
  </tr>
  <tr>
    <td class="fixedcol-a">Section header without link</td>
  </tr>
  <tr>
    <td class="fixedcol-a"><a href="a-vesseldetail.asp?id=7">Island Time</a></td>
    <td class="CbgU">1</td>
    <td class="CbgU">2</td>
    <td class="CbgT">3</td>
    <td class="CbgT">4</td>
  </tr>
</table>
</body></html>
"#;

fn period() -> Period {
    Period::new(2025, 6).unwrap()
}

#[test]
fn parses_vessel_rows_and_skips_linkless_rows() {
    let rows = overview::parse(PAGE).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].vessel.name, "Selkie");
    assert_eq!(rows[0].vessel.id, VesselId::new("Selkie"));
    assert_eq!(
        rows[0].vessel.detail_url.as_deref(),
        Some("a-vesseldetail.asp?id=42")
    );
    assert_eq!(rows[0].day_classes, ["CbgT", "CbgWE", "CbgM", "CbgM"]);

    assert_eq!(rows[1].vessel.id, VesselId::new("Island Time"));
    assert_eq!(rows[1].vessel.id.as_str(), "Island_Time");
}

#[test]
fn explicit_policy_records_every_mapped_day() {
    let rows = overview::parse(PAGE).unwrap();
    let obs = rows[0]
        .observations_for(period(), &StatusPolicy::explicit_available())
        .unwrap();
    assert_eq!(obs.len(), 4);
    assert_eq!(obs[0].status, DayStatus::Available);
    assert_eq!(obs[1].status, DayStatus::Available);
    assert_eq!(obs[2].status, DayStatus::Booked);
    assert_eq!(obs[0].date, period().first_day());
    assert_eq!(obs[3].date, period().first_day() + chrono::Days::new(3));
}

#[test]
fn implicit_policy_drops_available_days() {
    let rows = overview::parse(PAGE).unwrap();
    let obs = rows[0]
        .observations_for(period(), &StatusPolicy::implicit_available())
        .unwrap();
    let statuses: Vec<_> = obs.iter().map(|o| o.status).collect();
    assert_eq!(statuses, [DayStatus::Booked, DayStatus::Booked]);
}

#[test]
fn unmapped_cell_classes_are_dropped() {
    let page = r#"<table><tr>
        <td class="fixedcol-a"><a href="x">Selkie</a></td>
        <td class="CbgT">1</td>
        <td class="CbgMystery">2</td>
        <td class="CbgM">3</td>
    </tr></table>"#;
    let rows = overview::parse(page).unwrap();
    let obs = rows[0]
        .observations_for(period(), &StatusPolicy::explicit_available())
        .unwrap();
    // The unknown class still occupies day 2, so the booked day stays day 3.
    assert_eq!(obs.len(), 2);
    assert_eq!(obs[1].status, DayStatus::Booked);
    assert_eq!(obs[1].date, period().first_day() + chrono::Days::new(2));
}

#[test]
fn too_many_day_cells_is_a_parse_error() {
    let cells: String = (0..31).map(|_| r#"<td class="CbgT">x</td>"#).collect();
    let page = format!(
        r#"<table><tr><td class="fixedcol-a"><a href="x">Selkie</a></td>{cells}</tr></table>"#
    );
    let rows = overview::parse(&page).unwrap();
    // June has 30 days; a 31st cell cannot be dated.
    let err = rows[0]
        .observations_for(period(), &StatusPolicy::explicit_available())
        .unwrap_err();
    assert!(err.to_string().contains("30 days"), "{err}");
}

#[test]
fn page_without_rows_is_a_parse_error() {
    assert!(overview::parse("<html><body>maintenance</body></html>").is_err());
}

/// Test fixtures: representative HTML payloads from the HKO windtable page.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise extraction and parsing. They reflect the real page at
///   https://www.hko.gov.hk/en/sports/windtable.shtml?stn=<code>
///
/// Windtable page shape:
///   - first `<table>`: a legend (no caption) — always skipped by the runner
///   - one `<table>` per forecast date, each with
///       `<caption>Forecast Date: YYYY-M-D</caption>` (month/day unpadded)
///       and five dimension-major rows: a `<th>` label followed by one
///       `<td>` per forecast hour

/// Stanley page, one forecast date (2024-3-5) with hours 8 (15 km/h),
/// 9 (25 km/h) and 17 (30 km/h). Only hour 9 is inside the daylight
/// window at the default thresholds.
#[cfg(test)]
pub(crate) fn fixture_stanley_page() -> &'static str {
    r#"<html>
  <body>
    <div id="windtable">
      <table class="legend">
        <tr><th>Symbol</th><th>Meaning</th></tr>
        <tr><td>NE</td><td>Wind from the north-east</td></tr>
      </table>
      <table class="forecast">
        <caption>Forecast Date: 2024-3-5</caption>
        <tr>
          <th>Time (Hour)</th><td>8</td><td>9</td><td>17</td>
        </tr>
        <tr>
          <th>Temperature (°C)</th><td>18.0</td><td>18.5</td><td>17.0</td>
        </tr>
        <tr>
          <th>Wind Speed (km/h)</th><td>15</td><td>25</td><td>30</td>
        </tr>
        <tr>
          <th>Wind Direction</th><td>NE</td><td>NE</td><td>E</td>
        </tr>
        <tr>
          <th>3-Hourly Rainfall (mm)</th><td>0.0</td><td>0.0</td><td>0.5</td>
        </tr>
      </table>
    </div>
  </body>
</html>"#
}

/// Two forecast dates on one page: strong wind at 2024-3-5 hour 9 and
/// 2024-3-6 hour 12.
#[cfg(test)]
pub(crate) fn fixture_two_day_page() -> &'static str {
    r#"<html>
  <body>
    <table class="legend">
      <tr><th>Symbol</th><th>Meaning</th></tr>
    </table>
    <table class="forecast">
      <caption>Forecast Date: 2024-3-5</caption>
      <tr><th>Time (Hour)</th><td>9</td><td>12</td></tr>
      <tr><th>Temperature (°C)</th><td>18.5</td><td>19.5</td></tr>
      <tr><th>Wind Speed (km/h)</th><td>25</td><td>18</td></tr>
      <tr><th>Wind Direction</th><td>NE</td><td>NE</td></tr>
      <tr><th>3-Hourly Rainfall (mm)</th><td>0.0</td><td>0.0</td></tr>
    </table>
    <table class="forecast">
      <caption>Forecast Date: 2024-3-6</caption>
      <tr><th>Time (Hour)</th><td>9</td><td>12</td></tr>
      <tr><th>Temperature (°C)</th><td>17.0</td><td>18.0</td></tr>
      <tr><th>Wind Speed (km/h)</th><td>12</td><td>31</td></tr>
      <tr><th>Wind Direction</th><td>N</td><td>N</td></tr>
      <tr><th>3-Hourly Rainfall (mm)</th><td>0.2</td><td>0.0</td></tr>
    </table>
  </body>
</html>"#
}

/// A calm page: every hour is below the speed threshold or outside the
/// daylight window, so no finding should be produced.
#[cfg(test)]
pub(crate) fn fixture_calm_page() -> &'static str {
    r#"<html>
  <body>
    <table class="legend">
      <tr><th>Symbol</th><th>Meaning</th></tr>
    </table>
    <table class="forecast">
      <caption>Forecast Date: 2024-3-5</caption>
      <tr><th>Time (Hour)</th><td>9</td><td>12</td><td>20</td></tr>
      <tr><th>Temperature (°C)</th><td>18.5</td><td>19.5</td><td>18.0</td></tr>
      <tr><th>Wind Speed (km/h)</th><td>10</td><td>19</td><td>35</td></tr>
      <tr><th>Wind Direction</th><td>SE</td><td>SE</td><td>SE</td></tr>
      <tr><th>3-Hourly Rainfall (mm)</th><td>0.0</td><td>0.0</td><td>0.0</td></tr>
    </table>
  </body>
</html>"#
}

/// A page whose forecast table caption carries the wrong date format —
/// the whole table must be rejected by the parser.
#[cfg(test)]
pub(crate) fn fixture_bad_caption_page() -> &'static str {
    r#"<html>
  <body>
    <table class="legend">
      <tr><th>Symbol</th><th>Meaning</th></tr>
    </table>
    <table class="forecast">
      <caption>Forecast Date: 2024/03/05</caption>
      <tr><th>Time (Hour)</th><td>9</td></tr>
      <tr><th>Temperature (°C)</th><td>18.5</td></tr>
      <tr><th>Wind Speed (km/h)</th><td>25</td></tr>
      <tr><th>Wind Direction</th><td>NE</td></tr>
      <tr><th>3-Hourly Rainfall (mm)</th><td>0.0</td></tr>
    </table>
  </body>
</html>"#
}

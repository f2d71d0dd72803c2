//! Test fixtures shared across the HTML table parser tests


/// A fragment of the READER station index in its actual malformed shape:
/// cells close, interior rows do not.
pub const MALFORMED_STATION_TABLE: &str = r#"
<html><body>
<table border=1>
<tr><th>ID</th><th>Name</th><th>Latitude</th><th>Longitude</th><th>Height</th><th>Temperature</th>
<tr><td>89009</td><td>Amundsen-Scott</td><td>90.0S</td><td>0.0E</td><td>2835m</td>
<td><a href="Amundsen-Scott.All.temperature.html">All</a></td>
<tr><td>89564</td><td>Mawson</td><td>67.6S</td><td>62.9E</td><td>16m</td>
<td><a href="Mawson.All.temperature.html">All</a></td></tr>
</table>
</body></html>
"#;

/// The same table with every tag properly closed
pub const WELL_FORMED_STATION_TABLE: &str = r#"
<html><body>
<table border="1">
<tr><th>ID</th><th>Name</th><th>Latitude</th><th>Longitude</th><th>Height</th><th>Temperature</th></tr>
<tr><td>89009</td><td>Amundsen-Scott</td><td>90.0S</td><td>0.0E</td><td>2835m</td>
<td><a href="Amundsen-Scott.All.temperature.html">All</a></td></tr>
<tr><td>89564</td><td>Mawson</td><td>67.6S</td><td>62.9E</td><td>16m</td>
<td><a href="Mawson.All.temperature.html">All</a></td></tr>
</table>
</body></html>
"#;

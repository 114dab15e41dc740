//! Connection locator file reader
//!
//! The locator is an XML fragment of `add` elements:
//!
//! ```xml
//! <connectionStrings>
//!   <add name="orders" connectionString="Server=db1;Database=orders" providerName="mysql" />
//! </connectionStrings>
//! ```
//!
//! Only the requested names are extracted and the scan stops as soon as all
//! of them have been found. `providerName` is accepted but not read.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use dal_types::ConnectionStringEntry;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::error::RouterError;
use super::ConnectionStringRegistry;

const ADD_ELEMENT: &[u8] = b"add";
const NAME_ATTRIBUTE: &str = "name";
const CONNECTION_STRING_ATTRIBUTE: &str = "connectionString";

/// Read the requested connection strings from a locator file
///
/// The file is opened for shared reading so other processes may keep
/// reading or editing it. Names are matched case-insensitively.
pub fn load_connection_strings(
    path: &Path,
    keys: &[String],
) -> Result<ConnectionStringRegistry, RouterError> {
    if keys.is_empty() {
        return Ok(ConnectionStringRegistry::new());
    }

    let file = File::open(path).map_err(|source| RouterError::Io {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })?;

    read_connection_strings(BufReader::new(file), keys, path)
}

/// Stream `add` elements from `source` until every key in `keys` is found
pub fn read_connection_strings<R: BufRead>(
    source: R,
    keys: &[String],
    path: &Path,
) -> Result<ConnectionStringRegistry, RouterError> {
    let mut registry = ConnectionStringRegistry::new();
    // One slot per name regardless of case, first occurrence wins
    let mut seen = HashSet::new();
    let mut remaining: Vec<String> = keys
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| k.to_lowercase())
        .filter(|k| seen.insert(k.clone()))
        .collect();
    if remaining.is_empty() {
        return Ok(registry);
    }

    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Err(e) => return Err(xml_error(path, e)),
            Ok(Event::Eof) => break,
            Ok(Event::Start(element)) | Ok(Event::Empty(element))
                if element.name().as_ref() == ADD_ELEMENT =>
            {
                let name = attribute(&element, NAME_ATTRIBUTE, path)?.unwrap_or_default();
                let lowered = name.to_lowercase();

                if let Some(pos) = remaining.iter().position(|k| *k == lowered) {
                    let entry = fetch_entry(&name, &element, path)?;
                    debug!(name = %name, "Found connection string in locator");
                    remaining.remove(pos);

                    if let Err(reason) = registry.try_insert(entry) {
                        warn!(name = %name, %reason, "Ignoring locator entry");
                    }
                    if remaining.is_empty() {
                        break;
                    }
                }
            }
            Ok(_) => {}
        }
        buf.clear();
    }

    if !remaining.is_empty() {
        debug!(missing = ?remaining, "Connection strings not present in locator");
    }

    Ok(registry)
}

fn fetch_entry(
    name: &str,
    element: &BytesStart<'_>,
    path: &Path,
) -> Result<ConnectionStringEntry, RouterError> {
    match attribute(element, CONNECTION_STRING_ATTRIBUTE, path)? {
        Some(value) if !value.is_empty() => Ok(ConnectionStringEntry::new(name, value)),
        _ => Err(RouterError::MissingAttribute {
            entry: name.to_string(),
            attribute: CONNECTION_STRING_ATTRIBUTE,
        }),
    }
}

/// Unescaped value of an attribute, `None` when absent
fn attribute(element: &BytesStart<'_>, key: &str, path: &Path) -> Result<Option<String>, RouterError> {
    let Some(attr) = element
        .try_get_attribute(key)
        .map_err(|e| xml_error(path, e))?
    else {
        return Ok(None);
    };

    let value: Cow<'_, str> = attr.unescape_value().map_err(|e| xml_error(path, e))?;
    Ok(Some(value.into_owned()))
}

fn xml_error(path: &Path, error: impl std::fmt::Display) -> RouterError {
    RouterError::Xml {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

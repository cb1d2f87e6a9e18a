use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use crate::core;
use crate::types::errors::GpxRewriteError;
use crate::types::time_field::TimeField;

/// Rewrites every `<time>` value of `gpx` to canonical UTC (`…Z`) form and
/// returns the transformed document.
///
/// Every captured value is parsed and converted **before** any replacement
/// happens, so a value matching neither recognized shape aborts the whole
/// transform and the input is never partially rewritten.
///
/// Substitution is textual: each distinct raw value is replaced wherever it
/// occurs in the document, in first-seen order. Raw text that also appears
/// outside a `<time>` pair is rewritten too; the replacement matches on
/// value, not on position.
pub fn rewrite_times(gpx: &str) -> Result<String, GpxRewriteError> {
    let fields: Vec<TimeField> = convert_fields(gpx)?;
    Ok(apply(gpx, &fields))
}

/// Fixes the `<time>` values of a `.gpx` file **in place**.
///
/// The whole document is read into memory, every captured value is parsed
/// and converted (see [`rewrite_times`]), and only then is the file written
/// back. If any field fails to parse, the file on disk is left exactly as
/// it was.
///
/// # Parameters
/// - `path`: Path to the `.gpx` file. Must end with `.gpx`.
///
/// # Returns
/// - `Ok(count)` with the number of distinct raw values rewritten.
/// - `Err(GpxRewriteError)` if the extension is wrong, the file cannot be
///   read or written, or any `<time>` value matches neither recognized
///   shape.
pub fn from_gpx_file(path: &str) -> Result<usize, GpxRewriteError> {
    // check if provided file has .gpx format
    if !path.ends_with(".gpx") {
        return Err(GpxRewriteError::InvalidExtension {
            path: path.to_string(),
        });
    }

    let path_owned: String = path.to_string();
    let mut file: File = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            return Err(GpxRewriteError::OpenFile {
                path: path_owned,
                source,
            });
        }
    };

    // the whole document at once; substitution works on full text, not lines
    let mut gpx: String = String::new();
    file.read_to_string(&mut gpx)
        .map_err(|source| GpxRewriteError::Read {
            path: path_owned.clone(),
            source,
        })?;
    drop(file);

    let fields: Vec<TimeField> = convert_fields(&gpx)?;
    let rewritten: String = apply(&gpx, &fields);

    std::fs::write(path, rewritten.as_bytes()).map_err(|source| GpxRewriteError::Write {
        path: path_owned,
        source,
    })?;

    Ok(fields.len())
}

/// Parses each distinct raw value in first-seen order. The first value that
/// matches neither shape fails the whole pass.
fn convert_fields(gpx: &str) -> Result<Vec<TimeField>, GpxRewriteError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut fields: Vec<TimeField> = Vec::new();

    for raw in core::extract::time_fields(gpx) {
        if !seen.insert(raw) {
            continue; // duplicate raw text shares one replacement
        }
        match core::instant::from_raw(raw) {
            Some(field) => fields.push(field),
            None => {
                return Err(GpxRewriteError::UnrecognizedTime {
                    raw: raw.to_string(),
                });
            }
        }
    }

    Ok(fields)
}

fn apply(gpx: &str, fields: &[TimeField]) -> String {
    let mut out: String = gpx.to_string();
    for field in fields {
        let canonical: String = field.canonical_utc();
        tracing::debug!(raw = %field.text, utc = %canonical, "rewriting time value");
        out = out.replace(&field.text, &canonical);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<gpx version=\"1.1\" creator=\"test-logger\">
  <trk><trkseg>
    <trkpt lat=\"47.644548\" lon=\"-122.326897\">
      <ele>4.46</ele>
      <time>2023-08-26T13:14:31.012000+0200</time>
    </trkpt>
    <trkpt lat=\"47.644710\" lon=\"-122.326898\">
      <ele>4.94</ele>
      <time>2023-08-26T13:14:35+0200</time>
    </trkpt>
  </trkseg></trk>
</gpx>
";

    #[test]
    fn rewrites_both_shapes_to_utc() {
        let out: String = rewrite_times(TRACK).unwrap();
        assert!(out.contains("<time>2023-08-26T11:14:31Z</time>"));
        assert!(out.contains("<time>2023-08-26T11:14:35Z</time>"));
        assert!(!out.contains("+0200"));
    }

    #[test]
    fn leaves_surrounding_document_untouched() {
        let out: String = rewrite_times(TRACK).unwrap();
        assert!(out.contains("creator=\"test-logger\""));
        assert!(out.contains("<trkpt lat=\"47.644548\" lon=\"-122.326897\">"));
        assert!(out.contains("<ele>4.94</ele>"));
    }

    #[test]
    fn transform_is_idempotent_on_canonical_output() {
        let once: String = rewrite_times(TRACK).unwrap();
        let twice: String = rewrite_times(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_raw_values_are_all_replaced() {
        let gpx = "<time>2023-08-26T13:14:31+0200</time><time>2023-08-26T13:14:31+0200</time>";
        let out: String = rewrite_times(gpx).unwrap();
        assert_eq!(
            out,
            "<time>2023-08-26T11:14:31Z</time><time>2023-08-26T11:14:31Z</time>"
        );
    }

    #[test]
    fn one_bad_field_aborts_the_whole_transform() {
        let gpx = "<time>2023-08-26T13:14:31+0200</time><time>not-a-time</time>";
        match rewrite_times(gpx) {
            Err(GpxRewriteError::UnrecognizedTime { raw }) => assert_eq!(raw, "not-a-time"),
            other => panic!("expected UnrecognizedTime, got {other:?}"),
        }
    }

    #[test]
    fn document_without_time_fields_is_returned_unchanged() {
        let gpx = "<gpx><trk><trkseg></trkseg></trk></gpx>";
        assert_eq!(rewrite_times(gpx).unwrap(), gpx);
    }

    #[test]
    fn replacement_is_textual_not_structural() {
        // matching is by raw value: the same text outside the markers is
        // rewritten as well
        let gpx = "<desc>logged at 2023-08-26T13:14:31+0200</desc>\
                   <time>2023-08-26T13:14:31+0200</time>";
        let out: String = rewrite_times(gpx).unwrap();
        assert_eq!(
            out,
            "<desc>logged at 2023-08-26T11:14:31Z</desc>\
             <time>2023-08-26T11:14:31Z</time>"
        );
    }
}

//! Response body of the volumes search. Every field is optional on the wire; defaults are applied
//! once here when building [`BookCandidate`]s.

use serde::Deserialize;

use crate::candidate::{BookCandidate, NO_TITLE};

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    volume_info: Option<VolumeInfo>,
    access_info: Option<AccessInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    preview_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessInfo {
    pdf: Option<PdfAccess>,
    web_reader_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PdfAccess {
    is_available: Option<bool>,
}

impl Volume {
    fn into_candidate(self) -> BookCandidate {
        let (title, authors, preview_link) = match self.volume_info {
            Some(info) => (info.title, info.authors.unwrap_or_default(), info.preview_link),
            None => (None, Vec::new(), None),
        };
        let (downloadable, direct_link) = match self.access_info {
            Some(access) => (
                access.pdf.and_then(|p| p.is_available).unwrap_or(false),
                access.web_reader_link,
            ),
            None => (false, None),
        };

        BookCandidate {
            title: title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| NO_TITLE.to_string()),
            authors,
            downloadable,
            direct_link: direct_link.filter(|l| !l.is_empty()),
            preview_link: preview_link.filter(|l| !l.is_empty()),
        }
    }
}

/// Parses a search response body into candidates, keeping the service's order.
/// Missing or null `items` gives an empty list; a body of the wrong shape is an error.
pub fn parse_candidates(body: &str) -> Result<Vec<BookCandidate>, serde_json::Error> {
    let response: VolumesResponse = serde_json::from_str(body)?;
    Ok(response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(Volume::into_candidate)
        .collect())
}

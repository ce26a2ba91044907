use std::io;

use gallery_core::{Effect, Msg, Record};
use gallery_engine::{Artwork, EngineEvent, EngineHandle, FetchError, FetchSettings};
use gallery_logging::{gallery_info, gallery_warn};

const FALLBACK_ERROR: &str = "An error occurred";

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        gallery_info!("catalog base url {}", settings.base_url);
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request_id, page } => {
                    gallery_info!("FetchPage request_id={} page={}", request_id, page);
                    self.engine.fetch_page(request_id, page);
                }
            }
        }
    }

    /// Collects every engine event that has arrived since the last call.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched {
            request_id,
            page,
            result: Ok(body),
        } => Msg::PageLoaded {
            request_id,
            page,
            records: body.data.into_iter().map(map_artwork).collect(),
            total_records: body.pagination.total,
        },
        EngineEvent::PageFetched {
            request_id,
            page,
            result: Err(err),
        } => {
            gallery_warn!(
                "request {} for page {} failed ({}): {}",
                request_id,
                page,
                err.kind,
                err.message
            );
            Msg::PageFailed {
                request_id,
                page,
                message: failure_message(&err),
            }
        }
    }
}

fn map_artwork(artwork: Artwork) -> Record {
    Record {
        id: artwork.id,
        title: artwork.title.unwrap_or_default(),
        place_of_origin: artwork.place_of_origin.unwrap_or_default(),
        artist_display: artwork.artist_display.unwrap_or_default(),
        inscriptions: artwork.inscriptions.unwrap_or_default(),
        date_start: artwork.date_start,
        date_end: artwork.date_end,
    }
}

fn failure_message(err: &FetchError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use gallery_engine::{ArtworkPage, FailureKind, Pagination, HTTP_FAILURE_MESSAGE};
    use pretty_assertions::assert_eq;

    use super::*;

    fn artwork(id: u64) -> Artwork {
        Artwork {
            id,
            title: Some(format!("Artwork {id}")),
            place_of_origin: None,
            artist_display: Some("Unknown".to_string()),
            inscriptions: None,
            date_start: Some(1900),
            date_end: None,
        }
    }

    #[test]
    fn fetched_page_becomes_page_loaded() {
        let msg = map_event(EngineEvent::PageFetched {
            request_id: 4,
            page: 2,
            result: Ok(ArtworkPage {
                data: vec![artwork(13), artwork(14)],
                pagination: Pagination {
                    total: 500,
                    limit: 12,
                    offset: 12,
                    total_pages: 42,
                    current_page: 2,
                },
            }),
        });

        let Msg::PageLoaded {
            request_id,
            page,
            records,
            total_records,
        } = msg
        else {
            panic!("expected PageLoaded, got {msg:?}");
        };
        assert_eq!((request_id, page, total_records), (4, 2, 500));
        assert_eq!(
            records[0],
            Record {
                id: 13,
                title: "Artwork 13".to_string(),
                place_of_origin: String::new(),
                artist_display: "Unknown".to_string(),
                inscriptions: String::new(),
                date_start: Some(1900),
                date_end: None,
            }
        );
    }

    #[test]
    fn http_failure_keeps_fixed_message() {
        let msg = map_event(EngineEvent::PageFetched {
            request_id: 9,
            page: 3,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: HTTP_FAILURE_MESSAGE.to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::PageFailed {
                request_id: 9,
                page: 3,
                message: "Failed to fetch artworks data".to_string(),
            }
        );
    }

    #[test]
    fn empty_failure_message_falls_back() {
        let err = FetchError {
            kind: FailureKind::Network,
            message: String::new(),
        };
        assert_eq!(failure_message(&err), "An error occurred");
    }
}

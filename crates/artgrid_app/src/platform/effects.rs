use artgrid_core::{Artwork, Effect, Msg, PageData};
use artgrid_engine::{
    ArtworkRecord, EngineError, EngineEvent, EngineHandle, FailureKind, FetchSettings, PageResult,
};
use artgrid_logging::{artgrid_debug, artgrid_info, artgrid_warn};
use chrono::Local;

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request_id, page } => {
                    artgrid_info!("FetchPage request_id={} page={}", request_id, page);
                    self.engine.fetch_page(request_id, page);
                }
            }
        }
    }

    /// Collect every engine event that has arrived so far.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(|event| event_to_msg(event, Local::now().format("%H:%M:%S").to_string()))
            .collect()
    }
}

fn event_to_msg(event: EngineEvent, fetched_at: String) -> Msg {
    match event {
        EngineEvent::PageFetched {
            request_id,
            page,
            result: Ok(result),
        } => {
            artgrid_debug!(
                "Page {} loaded (request {}): {} records of {}",
                page,
                request_id,
                result.records.len(),
                result.total
            );
            Msg::PageLoaded {
                request_id,
                page,
                data: map_page(result),
                fetched_at: Some(fetched_at),
            }
        }
        EngineEvent::PageFetched {
            request_id,
            page,
            result: Err(err),
        } => {
            if err.kind == FailureKind::Cancelled {
                artgrid_debug!("Page {} request {} cancelled", page, request_id);
            } else {
                artgrid_warn!("Page {} request {} failed: {}", page, request_id, err);
            }
            Msg::PageFailed {
                request_id,
                page,
                message: err.kind.to_string(),
            }
        }
    }
}

fn map_page(result: PageResult) -> PageData {
    PageData {
        records: result.records.into_iter().map(map_record).collect(),
        total: result.total,
    }
}

fn map_record(record: ArtworkRecord) -> Artwork {
    Artwork {
        id: record.id,
        title: record.title,
        place_of_origin: record.place_of_origin,
        artist_display: record.artist_display,
        inscriptions: record.inscriptions,
        date_start: record.date_start,
        date_end: record.date_end,
    }
}

use std::sync::mpsc;
use std::thread;

use artgrid_core::{Artwork, Effect, Msg, Page};
use artgrid_engine::{
    ArtworkRecord, EngineCommands, EngineError, EngineEvent, EngineHandle, FetchSettings,
    PageOutput,
};
use grid_logging::{grid_debug, grid_info};

use super::app::Inbound;

/// Executes core effects on the engine and feeds engine results back as messages.
pub struct EffectRunner {
    commands: EngineCommands,
}

impl EffectRunner {
    pub fn new(
        settings: FetchSettings,
        msg_tx: mpsc::Sender<Inbound>,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings)?;
        let commands = engine.commands();
        spawn_event_loop(engine, msg_tx);
        Ok(Self { commands })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { fetch_id, page } => {
                    grid_info!("FetchPage fetch_id={} page={}", fetch_id, page);
                    self.commands.fetch_page(fetch_id, page);
                }
            }
        }
    }
}

/// Moves the engine onto its own thread; its events come back as messages.
fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<Inbound>) {
    thread::spawn(move || {
        while let Some(event) = engine.recv() {
            let EngineEvent::PageCompleted { fetch_id, result } = event;
            let msg = match result {
                Ok(output) => {
                    grid_debug!(
                        "Page {} arrived with {} records",
                        output.page,
                        output.records.len()
                    );
                    Msg::PageLoaded {
                        fetch_id,
                        page: map_page(output),
                    }
                }
                Err(err) => Msg::PageFailed {
                    fetch_id,
                    reason: err.to_string(),
                },
            };
            if msg_tx.send(Inbound::Msg(msg)).is_err() {
                break;
            }
        }
    });
}

fn map_page(output: PageOutput) -> Page {
    Page {
        number: output.page,
        page_size: output.pagination.limit,
        total: output.pagination.total,
        total_pages: output.pagination.total_pages,
        records: output.records.into_iter().map(map_artwork).collect(),
    }
}

fn map_artwork(record: ArtworkRecord) -> Artwork {
    Artwork {
        id: record.id,
        title: record.title.unwrap_or_default(),
        place_of_origin: record.place_of_origin,
        artist_display: record.artist_display,
        inscriptions: record.inscriptions,
        date_start: record.date_start,
        date_end: record.date_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_engine::ApiPagination;

    #[test]
    fn page_metadata_comes_from_pagination() {
        let output = PageOutput {
            page: 3,
            pagination: ApiPagination {
                total: 129_000,
                limit: 12,
                offset: 24,
                total_pages: 10_750,
                current_page: 3,
            },
            records: vec![ArtworkRecord {
                id: 4,
                title: None,
                place_of_origin: Some("Japan".to_string()),
                artist_display: None,
                inscriptions: None,
                date_start: Some(1830),
                date_end: None,
            }],
        };

        let page = map_page(output);
        assert_eq!(page.number, 3);
        assert_eq!(page.page_size, 12);
        assert_eq!(page.total, 129_000);
        assert_eq!(page.total_pages, 10_750);
        assert_eq!(page.records[0].title, "");
        assert_eq!(page.records[0].place_of_origin.as_deref(), Some("Japan"));
    }
}

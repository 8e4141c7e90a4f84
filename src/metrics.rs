use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub embeds_resolved: IntCounter,
    pub downloads_opened: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let embeds_resolved =
            IntCounter::new("embeds_resolved", "Embed modules resolved and rendered").unwrap();
        let downloads_opened =
            IntCounter::new("downloads_opened", "Download links resolved and opened").unwrap();
        let registry = Registry::new();
        registry.register(Box::new(embeds_resolved.clone())).unwrap();
        registry.register(Box::new(downloads_opened.clone())).unwrap();
        Self {
            embeds_resolved,
            downloads_opened,
        }
    }
}

use hjanki_anki::{AnkiConnectClient, CardTemplate};
use hjanki_config::Config;
use hjanki_dict::{DictService, HttpTransport, Transport};

/// Everything one session needs: the dictionary pipeline with its page
/// cache, and the Anki client when integration is enabled.
pub struct AppState<T: Transport = HttpTransport> {
    pub config: Config,
    pub dict: DictService<T>,
    pub anki: Option<AnkiConnectClient>,
}

impl AppState<HttpTransport> {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(&config.dict)?;
        let dict = DictService::new(transport).with_timeout(config.dict.timeout());
        Ok(Self::with_dict(config, dict))
    }
}

impl<T: Transport> AppState<T> {
    pub fn with_dict(config: Config, dict: DictService<T>) -> Self {
        let anki = config
            .anki
            .enabled
            .then(|| AnkiConnectClient::new(config.anki.url.clone()));

        Self { config, dict, anki }
    }

    pub fn card_template(&self) -> CardTemplate {
        CardTemplate::new(
            self.config.anki.deck.clone(),
            self.config.anki.model.clone(),
            self.config.anki.tags.clone(),
        )
    }
}

//! Avatar generator session.
//!
//! Owns the current [`AvatarSelection`] and derives everything else from it
//! on demand: the rule-based expression, the weighted mood analysis, the
//! layout, and captures.  The last mood chosen from the picker is tracked
//! alongside so a UI can show it as selected.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::capture::{capture_avatar, CaptureBackend, CaptureRequest, CapturedImage};
use crate::catalog::FeatureCategory;
use crate::config::GeneratorConfig;
use crate::error::AvatarError;
use crate::expression::{classify, ExpressionLabel};
use crate::mood::{analyze_selection, MoodAnalysis};
use crate::preset::{preset_for, MoodOption};
use crate::render::AvatarLayout;
use crate::selection::{AvatarSelection, RngSource};

/// Serializable view of the session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarSnapshot {
    pub selection: AvatarSelection,
    pub expression: ExpressionLabel,
    pub expression_emoji: &'static str,
    pub mood: MoodAnalysis,
    pub mood_color: &'static str,
}

/// Interactive avatar session.
pub struct AvatarGenerator {
    selection: AvatarSelection,
    current_mood: MoodOption,
    rng: RngSource<StdRng>,
    config: GeneratorConfig,
}

impl AvatarGenerator {
    /// Start a session from `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        let selection = AvatarSelection::create(Some(&config.initial));
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::debug!(seeded = config.random_seed.is_some(), "avatar session started");
        Self {
            selection,
            current_mood: MoodOption::default(),
            rng: RngSource(rng),
            config,
        }
    }

    pub fn selection(&self) -> &AvatarSelection {
        &self.selection
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The mood most recently applied from the picker.
    pub fn current_mood(&self) -> MoodOption {
        self.current_mood
    }

    /// Replace the whole selection.
    pub fn set_selection(&mut self, selection: AvatarSelection) {
        self.selection = selection;
    }

    /// Change one feature.  Invalid values leave the selection unchanged.
    pub fn update_feature(
        &mut self,
        category: FeatureCategory,
        value: &str,
    ) -> Result<&AvatarSelection, AvatarError> {
        self.selection = self.selection.update(category, value)?;
        Ok(&self.selection)
    }

    pub fn randomize(&mut self) -> &AvatarSelection {
        self.selection = AvatarSelection::randomize(&mut self.rng);
        tracing::debug!(expression = %self.expression(), "randomized avatar");
        &self.selection
    }

    /// Replace the selection with the preset for `mood`.
    pub fn apply_mood(&mut self, mood: MoodOption) -> &AvatarSelection {
        self.current_mood = mood;
        self.selection = preset_for(mood);
        &self.selection
    }

    /// [`apply_mood`](Self::apply_mood) by name; unknown names apply `Neutral`.
    pub fn apply_mood_name(&mut self, mood: &str) -> &AvatarSelection {
        let option = mood.parse().unwrap_or_else(|_| {
            tracing::debug!(mood, "unknown mood, applying Neutral");
            MoodOption::Neutral
        });
        self.apply_mood(option)
    }

    pub fn expression(&self) -> ExpressionLabel {
        classify(&self.selection)
    }

    pub fn mood_analysis(&self) -> MoodAnalysis {
        analyze_selection(&self.selection)
    }

    pub fn layout(&self) -> AvatarLayout {
        AvatarLayout::from_selection(&self.selection)
    }

    pub fn snapshot(&self) -> AvatarSnapshot {
        let expression = self.expression();
        let mood = self.mood_analysis();
        AvatarSnapshot {
            selection: self.selection,
            expression,
            expression_emoji: expression.emoji(),
            mood_color: mood.primary.mood.color(),
            mood,
        }
    }

    /// Capture request for the current layout with the configured settings.
    pub fn capture_request(&self) -> CaptureRequest {
        CaptureRequest {
            layout: self.layout(),
            scale: self.config.capture.scale,
            use_cors: self.config.capture.use_cors,
        }
    }

    /// Capture the current avatar.  `None` if the backend failed.
    pub async fn capture(&self, backend: &dyn CaptureBackend) -> Option<CapturedImage> {
        capture_avatar(backend, &self.capture_request(), &self.config.capture.file_name).await
    }
}

impl Default for AvatarGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

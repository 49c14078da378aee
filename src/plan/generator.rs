use std::collections::HashSet;

use tracing::debug;

use crate::{
    foundation::error::SlidecastResult,
    plan::{
        model::{ColorPalette, ScenePlan, VideoPlan, VideoPreferences},
        picker::{Picker, ThreadPicker, pick},
        tables::{PALETTE_POOL, SUPPORTIVE_HOOKS},
        templates::SceneBeat,
    },
};

/// Redraws allowed before a colliding id gets a positional suffix instead.
const ID_REDRAWS: usize = 8;

/// Turns [`VideoPreferences`] into a [`VideoPlan`].
///
/// Random choices are drawn from the picker in a fixed order: summary, hook, then an id and a
/// palette per scene, then outro, posting tip and soundtrack. A [`ScriptedPicker`] therefore
/// pins the whole plan.
///
/// [`ScriptedPicker`]: crate::plan::picker::ScriptedPicker
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator<P> {
    picker: P,
}

impl<P: Picker> PlanGenerator<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }

    pub fn into_picker(self) -> P {
        self.picker
    }

    /// Either a complete plan or an error before any scene exists.
    #[tracing::instrument(skip(self, prefs), fields(tone = %prefs.tone, duration = %prefs.duration))]
    pub fn generate(&mut self, prefs: &VideoPreferences) -> SlidecastResult<VideoPlan> {
        let input = prefs.scene_input()?;
        let beats = SceneBeat::sequence(prefs.duration)?;
        let profile = prefs.tone.profile();

        let headline = (profile.headline)(input.topic);
        let summary = pick(&mut self.picker, &profile.summaries).to_string();
        let hook = pick(&mut self.picker, &SUPPORTIVE_HOOKS).to_string();

        let mut seen_ids = HashSet::with_capacity(beats.len());
        let mut scenes = Vec::with_capacity(beats.len());
        for (index, beat) in beats.iter().enumerate() {
            let text = beat.compose(&input);
            let id = self.unique_id(index, &mut seen_ids);
            let palette = ColorPalette::from(pick(&mut self.picker, &PALETTE_POOL));
            scenes.push(ScenePlan {
                id,
                title: text.title.to_owned(),
                main_text: text.main_text,
                subtitle: text.subtitle,
                voice_over: text.voice_over,
                tip: text.tip,
                palette,
            });
        }

        let outro = pick(&mut self.picker, &profile.outros).to_string();
        let posting_tip = pick(&mut self.picker, prefs.duration.posting_notes()).to_string();
        let soundtrack = pick(&mut self.picker, &profile.soundtracks).to_string();

        debug!(scenes = scenes.len(), %headline, "generated video plan");

        Ok(VideoPlan {
            headline,
            summary,
            hook,
            scenes,
            outro,
            posting_tip,
            soundtrack,
        })
    }

    fn unique_id(&mut self, index: usize, seen: &mut HashSet<String>) -> String {
        for _ in 0..ID_REDRAWS {
            let id = self.picker.next_id();
            if !id.is_empty() && seen.insert(id.clone()) {
                return id;
            }
        }

        let mut id = format!("{}-{index}", self.picker.next_id());
        while !seen.insert(id.clone()) {
            id.push('x');
        }
        id
    }
}

/// Generate a plan with the thread-local random source.
pub fn generate_plan(prefs: &VideoPreferences) -> SlidecastResult<VideoPlan> {
    PlanGenerator::new(ThreadPicker::thread()).generate(prefs)
}

#[cfg(test)]
#[path = "../../tests/unit/plan/generator.rs"]
mod tests;

use std::fmt::Write as _;

use crate::plan::model::VideoPlan;

impl VideoPlan {
    /// Plain-text, scene-by-scene guide for whoever records the narration.
    pub fn to_script(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_script(&mut out);
        out
    }

    fn write_script(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", self.headline)?;
        writeln!(out)?;
        writeln!(out, "{}", self.summary)?;
        writeln!(out, "Hook: {}", self.hook)?;
        writeln!(out, "Suggested soundtrack: {}", self.soundtrack)?;

        for (index, scene) in self.scenes.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "Scene {}: {}", index + 1, scene.title)?;
            writeln!(out, "  {}", scene.main_text)?;
            writeln!(out, "  {}", scene.subtitle)?;
            writeln!(out, "  Voiceover cue: {}", scene.voice_over)?;
            writeln!(out, "  Visual tip: {}", scene.tip)?;
        }

        writeln!(out)?;
        writeln!(out, "Outro: {}", self.outro)?;
        writeln!(out, "Posting tip: {}", self.posting_tip)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/script.rs"]
mod tests;

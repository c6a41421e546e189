//! Display implementations for domain models and the cooking view.
//!
//! All output is markdown: headers for titles, bullet lists for metadata and
//! step outlines, and the ✓ / ➤ / ○ icons from [`StepMark`] for progress.

use std::fmt;

use super::datetime::{LocalDateTime, TotalTime};
use crate::{
    models::{Recipe, RecipeSummary, Step, StepMark},
    session::{Clock, TimerPhase},
    view::CookingView,
};

impl fmt::Display for StepMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimerPhase::Idle => "paused",
            TimerPhase::Running => "running",
            TimerPhase::Expired => "done",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.order, self.description)?;
        if self.has_timer() {
            write!(f, " ({})", Clock(self.timer_seconds()))?;
        }
        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        let total = self.total_timer_seconds();
        if total > 0 {
            writeln!(f, "- Timed: {}", TotalTime(total))?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this recipe.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            let mut steps: Vec<&Step> = self.steps.iter().collect();
            steps.sort_by_key(|step| step.order);
            for step in steps {
                writeln!(f, "- {step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({} steps)",
            self.title, self.id, self.total_steps
        )?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        if self.timed_steps > 0 {
            writeln!(
                f,
                "- **Timers**: {} ({} total)",
                self.timed_steps,
                TotalTime(self.total_timer_sec)
            )?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for CookingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.recipe_title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        let Some(step) = &self.current_step else {
            return writeln!(f, "Recipe not ready: there are no steps to cook.");
        };

        writeln!(
            f,
            "## Step {} of {}",
            self.current_step_index + 1,
            self.total_steps
        )?;
        writeln!(f)?;
        writeln!(f, "{}", step.description)?;
        writeln!(f)?;

        if step.has_timer() {
            writeln!(f, "Timer: {} ({})", self.formatted_time, self.timer_phase)?;
            writeln!(f)?;
        }

        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "- {} {step}", self.mark(index).icon())?;
        }

        if self.all_steps_completed {
            writeln!(f)?;
            writeln!(f, "All steps complete.")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::session::CookingSession;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: 12,
            title: "Pan Sauce".to_string(),
            description: Some("Deglaze and reduce".to_string()),
            steps: vec![Step::timed(2, "Reduce by half", 240), Step::new(1, "Deglaze")],
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::new(1, "Deglaze").to_string(), "1. Deglaze");
        assert_eq!(
            Step::timed(2, "Reduce", 240).to_string(),
            "2. Reduce (04:00)"
        );
        assert_eq!(Step::timed(3, "Rest", 0).to_string(), "3. Rest");
    }

    #[test]
    fn test_recipe_display_sorts_steps() {
        let output = sample_recipe().to_string();

        assert!(output.starts_with("# 12. Pan Sauce"));
        assert!(output.contains("- Timed: 4m"));
        assert!(output.contains("Deglaze and reduce"));
        let first = output.find("- 1. Deglaze").unwrap();
        let second = output.find("- 2. Reduce by half (04:00)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_recipe_summary_display() {
        let summary = RecipeSummary::from(&sample_recipe());
        let output = summary.to_string();

        assert!(output.contains("## Pan Sauce (ID: 12) (2 steps)"));
        assert!(output.contains("- **Timers**: 1 (4m total)"));
    }

    #[test]
    fn test_cooking_view_display() {
        let mut session = CookingSession::new(sample_recipe().steps);
        session.next();
        let view = CookingView::from_session(Some("Pan Sauce"), &session);
        let output = view.to_string();

        assert!(output.contains("# Pan Sauce"));
        assert!(output.contains("## Step 2 of 2"));
        assert!(output.contains("Timer: 04:00 (paused)"));
        assert!(output.contains("- ✓ 1. Deglaze"));
        assert!(output.contains("- ➤ 2. Reduce by half (04:00)"));
        assert!(!output.contains("All steps complete."));

        session.finalize();
        let output = CookingView::from(&session).to_string();
        assert!(output.contains("All steps complete."));
    }

    #[test]
    fn test_cooking_view_not_ready() {
        let view = CookingView::from(&CookingSession::new(vec![]));
        assert_eq!(
            view.to_string(),
            "Recipe not ready: there are no steps to cook.\n"
        );
    }
}

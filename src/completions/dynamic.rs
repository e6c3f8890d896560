use crate::outline::Step;

/// Context for shell completion
#[derive(Debug, Clone)]
pub struct CompletionContext {
    pub shell: String,
    pub cmdline: String,
    pub current_word: String,
    pub prev_word: String,
}

impl CompletionContext {
    /// Parse completion context from shell-provided arguments:
    /// `[cmdline, current_word, prev_word]`.
    pub fn from_args(shell: &str, args: &[String]) -> Self {
        Self {
            shell: shell.to_string(),
            cmdline: args.first().cloned().unwrap_or_default(),
            current_word: args.get(1).cloned().unwrap_or_default(),
            prev_word: args.get(2).cloned().unwrap_or_default(),
        }
    }

    /// Whether the word being completed is a step id.
    fn wants_step_id(&self) -> bool {
        match self.prev_word.as_str() {
            "--step" | "-s" => true,
            _ => {
                let mut words = self.cmdline.split_whitespace().skip(1);
                matches!(words.next(), Some("check" | "uncheck"))
            }
        }
    }
}

/// Step ids in the outline starting with `prefix`, in document order.
pub fn complete_step_ids(outline: &Step, prefix: &str) -> Vec<String> {
    outline
        .walk()
        .map(|step| step.path().to_string())
        .filter(|id| id.starts_with(prefix))
        .collect()
}

/// Candidates for the word being completed.
pub fn complete_dynamic(ctx: &CompletionContext, outline: &Step) -> Vec<String> {
    if ctx.wants_step_id() {
        complete_step_ids(outline, &ctx.current_word)
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline;

    fn ctx(cmdline: &str, current: &str, prev: &str) -> CompletionContext {
        CompletionContext::from_args(
            "bash",
            &[cmdline.to_string(), current.to_string(), prev.to_string()],
        )
    }

    #[test]
    fn test_complete_step_ids_prefix() {
        let root = outline::load().unwrap();
        assert_eq!(
            complete_step_ids(&root, "7.3"),
            ["7.3", "7.3.1", "7.3.2"]
        );
        // 1, 10, 11, 12 and their sub-items
        assert_eq!(complete_step_ids(&root, "1").len(), 5 + 5 + 4 + 4);
        assert!(complete_step_ids(&root, "x").is_empty());
    }

    #[test]
    fn test_complete_dynamic_for_check() {
        let root = outline::load().unwrap();
        let completions = complete_dynamic(&ctx("mlsteps check 5.3", "5.3", "check"), &root);
        assert_eq!(completions, ["5.3", "5.3.1", "5.3.2"]);

        let completions = complete_dynamic(&ctx("mlsteps uncheck 1.1 9.", "9.", "1.1"), &root);
        assert_eq!(completions, ["9.1", "9.2", "9.3"]);
    }

    #[test]
    fn test_complete_dynamic_for_step_flag() {
        let root = outline::load().unwrap();
        let completions = complete_dynamic(&ctx("mlsteps show --step 12", "12", "--step"), &root);
        assert_eq!(completions, ["12", "12.1", "12.2", "12.3"]);
    }

    #[test]
    fn test_complete_dynamic_other_words() {
        let root = outline::load().unwrap();
        assert!(complete_dynamic(&ctx("mlsteps show --format ", "", "--format"), &root).is_empty());
        assert!(complete_dynamic(&ctx("mlsteps ", "", "mlsteps"), &root).is_empty());
    }
}

/// Builds the persona + task prompt for one critique.
pub fn build_critique_prompt(company: &str, manager: &str, question: &str, answer: &str) -> String {
    let persona = format!(
        "You are {manager}, the unapologetically chaotic Hiring Manager at {company}.\n\
         Your style is razor-witty, corporate-feral, and a little unhinged, but not hateful or discriminatory.\n\
         Speak like a jaded executive life coach who lives inside a slide deck.\n\
         Keep responses SHORT: 1–3 punchy sentences max. Address the candidate directly."
    );
    let task = format!(
        "QUESTION: {question}\n\
         CANDIDATE_ANSWER: {answer}\n\
         TASK: Deliver a bespoke critique of the candidate's answer in the context of the question.\n\
         - Be funny, specific, and cutting, like performance feedback written on a sticky note at 2am.\n\
         - Avoid slurs or anything targeting protected classes.\n\
         - No markdown, no lists, just prose (1–3 sentences)."
    );
    format!("{}\n\n{}", persona, task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_is_pure() {
        let a = build_critique_prompt("Quantum Compliance LLC", "Nebula FOMO", "Why?", "Because.");
        let b = build_critique_prompt("Quantum Compliance LLC", "Nebula FOMO", "Why?", "Because.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_layout() {
        let prompt = build_critique_prompt("Acme", "Kevlar Moonshot", "Q?", "A!");
        let (persona, task) = prompt.split_once("\n\n").unwrap();

        assert!(persona.starts_with(
            "You are Kevlar Moonshot, the unapologetically chaotic Hiring Manager at Acme.\n"
        ));
        assert!(persona.ends_with("Address the candidate directly."));
        assert!(task.starts_with("QUESTION: Q?\nCANDIDATE_ANSWER: A!\nTASK: "));
        assert!(task.contains("No markdown, no lists"));
        assert!(!prompt.starts_with(char::is_whitespace));
        assert!(!prompt.ends_with(char::is_whitespace));
    }

    #[test]
    fn test_prompt_embeds_answer_verbatim() {
        let answer = "  {braces} and\nnewlines & \"quotes\"  ";
        let question = "Estimate our NPS among ghosts.";
        let prompt = build_critique_prompt("Acme", "Mirth Dumpster", question, answer);
        assert!(prompt.contains(answer));
        assert!(prompt.contains(question));
    }
}

//! Flashcard notebooks: a deck of question/answer cards plus a small `ipywidgets`
//! viewer that steps through the deck, flips cards, and shuffles the order.

use crate::core::models::notebook::Notebook;
use crate::core::models::toc::Flashcard;

const INSTRUCTIONS: &str = "## Master the Concepts through Active Recall

**Instructions:**
1. Run the cells below to load the deck and the flashcard engine.
2. Read the **Question** and answer it in your head or out loud.
3. Click **Flip** to check your answer, then **Next** or **Prev** to move through the deck.
4. Click **Shuffle** to review the cards in a new random order.";

const PLACEHOLDER: &str = "*(Placeholder)* Interactive flashcards will be generated here.";

const ENGINE: &str = r##"import random
import ipywidgets as widgets
from IPython.display import display, Markdown

order = list(range(len(flashcards)))
state = {"position": 0, "front": True}
counter = widgets.Label()
output = widgets.Output(layout={"border": "1px solid #444", "padding": "20px", "min_height": "200px"})

def render():
    card = flashcards[order[state["position"]]]
    label, text = ("❓ Question", card["q"]) if state["front"] else ("💡 Answer", card["a"])
    counter.value = f"Card {state['position'] + 1} of {len(flashcards)}"
    with output:
        output.clear_output()
        display(Markdown(f"# {label}\n\n{text}"))

def step(offset):
    state["position"] = (state["position"] + offset) % len(flashcards)
    state["front"] = True
    render()

def on_flip(_):
    state["front"] = not state["front"]
    render()

def on_shuffle(_):
    random.shuffle(order)
    state["position"] = 0
    state["front"] = True
    render()

controls = []
for description, handler in [
    ("⬅️ Prev", lambda _: step(-1)),
    ("🔄 Flip", on_flip),
    ("Next ➡️", lambda _: step(1)),
    ("🔀 Shuffle", on_shuffle),
]:
    button = widgets.Button(description=description)
    button.on_click(handler)
    controls.append(button)

display(widgets.VBox([counter, output, widgets.HBox(controls)]))
render()
"##;

/// Escapes `text` as a double-quoted Python string literal.
pub fn python_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn deck_source(cards: &[Flashcard]) -> String {
    let mut source = String::from("flashcards = [\n");
    for card in cards {
        source.push_str(&format!(
            "    {{\"q\": {}, \"a\": {}}},\n",
            python_string_literal(&card.front),
            python_string_literal(&card.back)
        ));
    }
    source.push(']');
    source
}

fn interactive_deck(heading: &str, cards: &[Flashcard]) -> Notebook {
    let mut nb = Notebook::new();
    nb.push_markdown(format!("# {}\n\n{}", heading, INSTRUCTIONS))
        .push_code(deck_source(cards))
        .push_code(ENGINE);
    nb
}

/// The per-chapter flashcards notebook; a placeholder when the chapter has no cards.
pub fn chapter_deck(chapter_title: &str, cards: &[Flashcard]) -> Notebook {
    let heading = format!("🧠 Flashcards: {}", chapter_title);
    if cards.is_empty() {
        let mut nb = Notebook::new();
        nb.push_markdown(format!("# {}\n\n{}", heading, PLACEHOLDER));
        return nb;
    }
    interactive_deck(&heading, cards)
}

/// A volume-level starting point with a single sample card.
pub fn template_deck() -> Notebook {
    let sample = [Flashcard {
        front: "State Newton's second law.".to_string(),
        back: r"$\vec F = m\vec a$".to_string(),
    }];
    interactive_deck("🧠 Flashcards – TEMPLATE", &sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::notebook::CellKind;

    #[test]
    fn python_string_literal_escapes_quotes_backslashes_and_newlines() {
        assert_eq!(python_string_literal("plain"), "\"plain\"");
        assert_eq!(
            python_string_literal("say \"atoms\"\nthen $\\vec F$"),
            "\"say \\\"atoms\\\"\\nthen $\\\\vec F$\""
        );
    }

    #[test]
    fn empty_deck_is_a_single_placeholder_cell() {
        let nb = chapter_deck("Spin One", &[]);
        assert_eq!(nb.len(), 1);
        assert!(nb.cells()[0].source.starts_with("# 🧠 Flashcards: Spin One\n\n*(Placeholder)*"));
    }

    #[test]
    fn deck_lists_cards_in_declaration_order() {
        let cards = vec![
            Flashcard { front: "First?".into(), back: "One".into() },
            Flashcard { front: "Second?".into(), back: "Two".into() },
        ];
        let nb = chapter_deck("Atoms in Motion", &cards);
        assert_eq!(nb.len(), 3);
        assert_eq!(nb.cells()[1].kind, CellKind::Code);
        let deck = &nb.cells()[1].source;
        assert!(deck.starts_with("flashcards = [\n"));
        assert!(deck.find("First?").unwrap() < deck.find("Second?").unwrap());
        assert!(nb.cells()[2].source.contains("widgets.Button"));
    }

    #[test]
    fn viewer_steps_flips_and_shuffles_with_a_counter() {
        let cards = [Flashcard { front: "Q".into(), back: "A".into() }];
        let nb = chapter_deck("Atoms in Motion", &cards);
        let engine = &nb.cells()[2].source;
        for control in ["⬅️ Prev", "🔄 Flip", "Next ➡️", "🔀 Shuffle"] {
            assert!(engine.contains(control), "missing {control}");
        }
        assert!(engine.contains("random.shuffle(order)"));
        assert!(engine.contains("% len(flashcards)"));
        assert!(engine.contains(r#"f"Card {state['position'] + 1} of {len(flashcards)}""#));
        assert!(nb.cells()[0].source.contains("**Shuffle**"));
    }

    #[test]
    fn template_deck_has_sample_card() {
        let nb = template_deck();
        assert!(nb.cells()[1].source.contains("Newton's second law"));
        assert!(nb.cells()[1].source.contains("\\\\vec F"));
    }
}

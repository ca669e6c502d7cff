/// Produces the text shown in the translator's result field.
///
/// The state model is agnostic to how translation happens; a real backend
/// slots in behind this trait without touching any transition logic.
pub trait TranslationProvider {
    fn translate(&self, source: &str) -> String;
}

/// Placeholder provider: a fixed two-way swap of one hard-wired pair.
/// Deliberately NOT a lookup against the word catalog.
pub struct EchoTranslator;

impl TranslationProvider for EchoTranslator {
    fn translate(&self, source: &str) -> String {
        if source == "Hello" {
            "Привет".to_string()
        } else {
            "Hello".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_maps_to_privet() {
        assert_eq!(EchoTranslator.translate("Hello"), "Привет");
    }

    #[test]
    fn everything_else_maps_back_to_hello() {
        assert_eq!(EchoTranslator.translate("Привет"), "Hello");
        assert_eq!(EchoTranslator.translate("hello"), "Hello");
        assert_eq!(EchoTranslator.translate("Аэропорт"), "Hello");
    }
}

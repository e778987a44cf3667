#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    pub fn print_summary(&self) {
        if self.is_valid() {
            println!("✅ Configuration is valid");
        } else {
            println!("❌ Configuration has {} errors", self.errors.len());
        }

        for error in &self.errors {
            println!("   ❌ {}", error);
        }

        for warning in &self.warnings {
            println!("   ⚠️ {}", warning);
        }
    }
}

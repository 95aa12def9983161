use std::fmt::{Display, Formatter};

#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.name)
    }
}

impl Profile {
    pub fn named(name: String) -> Self {
        Profile { name }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::named("asm".to_string())
    }
}

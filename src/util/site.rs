pub const APP_NAME: &str = "Sonido Ignacio";
pub const APP_TAGLINE: &str = "the anti-studio";
pub const CONTACT_EMAIL: &str = "ignacio@sonidoignacio.com";

//! User-facing flash strings, kept in the application's original Polish.

pub const ACCOUNT_CREATED: &str = "Utworzono konto";
pub const VERIFY_EMAIL: &str = "Zweryfikuj swoje konto email";
pub const TOO_MANY_ATTEMPTS: &str = "Zbyt dużo prób, spróbuj ponownie później";
pub const BAD_CREDENTIALS: &str =
    "Podałeś błędne hasło lub takie konto z takim adresem email nie istnieje";
pub const EMAIL_TAKEN: &str = "Konto z takim adresem email już istnieje";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Hasła nie są takie same!";
pub const RESET_EMAIL_SENT: &str = "Na email zostały wysłane dalsze instrukcje";
pub const EMAIL_NOT_FOUND: &str = "Nie istnieje konto z takim adresem email";
pub const PICTURE_UPLOADED: &str = "Dodano zdjęcie";
pub const NOTE_DELETED: &str = "Usunięto notatkę";
pub const NOTE_NOT_FOUND: &str = "Nie znaleziono notatki";
pub const LOGIN_REQUIRED: &str = "Musisz się zalogować";
pub const GENERIC_ERROR: &str = "Wystąpił błąd";

//! Selector catalog for the pages the suite drives
//!
//! Selectors mirror the web demo's markup. Navigation anchors are plain
//! link text in the demo, so those use Playwright text selectors; the
//! result and balance elements have no stable class and are located by
//! their inline style, which is how the demo renders them.

pub mod home {
    pub const WELCOME_TITLE: &str = "h1";
    pub const NAVIGATION_MENU: &str = "nav";
    pub const LOGIN_LINK: &str = "text=Giriş Yap";
    pub const ACCOUNT_LINK: &str = "text=Hesabım";
    pub const CREDIT_APPLICATION_LINK: &str = "text=Kredi Başvurusu";
    pub const LOGOUT_LINK: &str = "text=Çıkış";
}

pub mod login {
    pub const EMAIL_INPUT: &str = "input[type='email']";
    pub const PASSWORD_INPUT: &str = "input[type='password']";
    pub const SUBMIT_BUTTON: &str = "button[type='submit']";
    pub const ERROR_MESSAGE: &str = ".error-message";
}

pub mod account {
    pub const DETAILS: &str = ".account-details";
    pub const BALANCE: &str =
        "div[style*='font-size: 24px'][style*='color: rgb(40, 167, 69)']";
}

pub mod credit {
    pub const LOAN_AMOUNT_INPUT: &str = "input[placeholder='örnek: 100000']";
    pub const LOAN_TERM_INPUT: &str = "input[placeholder='örnek: 36']";
    pub const CALCULATE_BUTTON: &str = "button:has-text('AI Analiz Et')";
    pub const APPLY_BUTTON: &str = "button:has-text('Krediyi Hesabıma Çek')";
    pub const MONTHLY_PAYMENT_RESULT: &str = "div[style*='font-size: 24px']";
    pub const LOADING_INDICATOR: &str = ".loading";
}

// Landing page sections, top to bottom
// Al Bayt Al Atiq Web Team (c)2025

mod contact;
mod cta;
mod footer;
mod mock_form;
mod nav;
mod process;
mod quote;
mod services;
mod strengths;

pub use contact::ContactUs;
pub use cta::FinalCta;
pub use footer::Footer;
pub use nav::Nav;
pub use process::ProcessFlow;
pub use quote::QuoteEstimator;
pub use services::ServicesView;
pub use strengths::StrengthsDashboard;

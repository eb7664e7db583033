pub mod headhunter;
pub mod superjob;

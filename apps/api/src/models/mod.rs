pub mod ats;

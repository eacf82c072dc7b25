mod mood;

pub use mood::MoodSelectorManager;

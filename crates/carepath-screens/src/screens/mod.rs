pub mod ayurvedic;
pub mod behavioral;
pub mod cbt_homework;
pub mod coordination;
pub mod detox;
pub mod dosage_adjustment;
pub mod evaluation;
pub mod fallback;
pub mod follow_up;
pub mod medication;
pub mod mood_tracking;
pub mod parameter_tracking;
pub mod sound_therapy;

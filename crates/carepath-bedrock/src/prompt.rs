/// Headings the drafted plan must contain, in order.
pub const PLAN_SECTIONS: [&str; 6] = [
    "Neuro-Acoustic Protocol (Sound Therapy)",
    "Nutraceutical Considerations (Ayurvedic/Herbal)",
    "Behavioral Intervention (Prosocial activities)",
    "Digital Hygiene Protocol",
    "Therapeutic Homework",
    "Objective Progress Metrics",
];

/// System prompt: persona and the rules every drafted plan follows.
pub fn system_prompt() -> String {
    let sections = PLAN_SECTIONS
        .iter()
        .map(|s| format!("   - {s}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Act as a clinical psychologist drafting a professional \"Wellness Plan Template\".\n\n\
         CRITICAL RULES:\n\
         1. DO NOT suggest medical diagnoses.\n\
         2. Focus solely on non-pharmacological interventions.\n\
         3. Use clinically conservative language.\n\
         4. Provide the following sections:\n\
         {sections}\n\n\
         Format the response with clear headers and bullet points."
    )
}

/// User message carrying the clinician's description of the patient.
pub fn user_prompt(patient_needs: &str) -> String {
    format!(
        "Based on these patient needs: \"{}\", create a comprehensive wellness plan.",
        patient_needs.trim()
    )
}

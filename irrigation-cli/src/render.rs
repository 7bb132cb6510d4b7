use irrigation_core::{
    Crop, Factors, Label, Language, LogEntry, SessionStats, evaluate_factors, resolve_label,
};

pub fn print_weather(entry: &LogEntry, lang: Language) {
    let w = &entry.weather;
    let label = |l| resolve_label(lang, l);

    println!();
    println!("{} ({})", label(Label::Weather), display_location(entry));
    println!("  {:<28} {:.1}°C", label(Label::Temperature), w.temperature_c);
    println!("  {:<28} {}%", label(Label::Humidity), w.humidity_pct);
    println!("  {:<28} {} mm", label(Label::Rainfall), w.rainfall_mm);
    println!("  {:<28} {}", label(Label::Condition), w.condition);
}

pub fn print_advice(entry: &LogEntry, lang: Language) {
    let advice = &entry.advice;
    let label = |l| resolve_label(lang, l);

    println!();
    println!("{}", label(Label::Advice));
    if advice.irrigate {
        println!("  {} for {} - {}", label(Label::Recommended), entry.crop, advice.priority);
    } else {
        println!("  {} for {}", label(Label::NotNeeded), entry.crop);
    }
    println!("  {}: {}%", label(Label::SavingScore), advice.water_score);

    let factors = factors_for(entry);
    let triggered = triggered_factors(&factors);
    if triggered.is_empty() {
        println!("  Conditions: all within {} requirements", entry.crop);
    } else {
        println!("  Conditions: {}", triggered.join(", "));
    }
}

fn factors_for(entry: &LogEntry) -> Factors {
    evaluate_factors(
        &entry.crop.profile(),
        f64::from(entry.soil_moisture_pct),
        entry.weather.temperature_c,
        f64::from(entry.weather.humidity_pct),
        entry.weather.rainfall_mm,
    )
}

fn triggered_factors(factors: &Factors) -> Vec<&'static str> {
    [
        (factors.low_moisture, "soil moisture below minimum"),
        (factors.high_temperature, "temperature above threshold"),
        (factors.low_rainfall, "rainfall below threshold"),
        (factors.low_humidity, "low humidity"),
    ]
    .into_iter()
    .filter_map(|(hit, text)| hit.then_some(text))
    .collect()
}

fn display_location(entry: &LogEntry) -> &str {
    if entry.weather.location_name.is_empty() {
        &entry.location
    } else {
        &entry.weather.location_name
    }
}

pub fn print_history(entries: &[LogEntry]) {
    if entries.is_empty() {
        println!("No irrigation history available yet.");
        return;
    }

    println!(
        "{:<19}  {:<16} {:<10} {:>5} {:>7} {:>5} {:>6}  {:<16}",
        "datetime", "location", "crop", "soil", "temp", "hum", "rain", "priority"
    );
    for e in entries {
        let priority = if e.advice.irrigate { e.advice.priority.label() } else { "N/A" };
        println!(
            "{:<19}  {:<16} {:<10} {:>4}% {:>6.1}° {:>4}% {:>6.1}  {:<16}",
            e.timestamp.format("%Y-%m-%d %H:%M:%S"),
            truncate(&e.location, 16),
            e.crop,
            e.soil_moisture_pct,
            e.weather.temperature_c,
            e.weather.humidity_pct,
            e.weather.rainfall_mm,
            priority,
        );
    }
}

pub fn print_stats(stats: &SessionStats) {
    println!("Total Checks:             {}", stats.total_checks);
    println!("Irrigation Recommended:   {}", stats.irrigation_recommended);
    if let Some(eff) = stats.water_saving_efficiency_pct {
        println!("Water Saving Efficiency:  {eff:.1}%");
    }
}

pub fn print_crop(crop: Crop) {
    let p = crop.profile();
    println!("{crop} Requirements:");
    println!("  Min Soil Moisture:     {}%", p.min_moisture_pct);
    println!("  Temperature Threshold: {}°C", p.temp_threshold_c);
    println!("  Rain Threshold:        {}mm", p.rain_threshold_mm);
}

pub fn print_crop_table() {
    println!("{:<10} {:>12} {:>12} {:>12}", "crop", "min moist %", "temp °C", "rain mm/h");
    for crop in Crop::all() {
        let p = crop.profile();
        println!(
            "{:<10} {:>12} {:>12} {:>12}",
            crop.as_str(),
            p.min_moisture_pct,
            p.temp_threshold_c,
            p.rain_threshold_mm
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    } else {
        s.to_string()
    }
}

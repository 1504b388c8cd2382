use postmatch_model::SubscriberRecord;
use tracing::info;

/// Fixed roster used when no subscriber export is supplied.
pub fn demo_roster() -> Vec<SubscriberRecord> {
    let roster = vec![
        SubscriberRecord::new(
            "María García",
            "demo_maria@example.com",
            "Calle Gran Vía 31, 28013 Madrid",
        )
        .with_city("Madrid")
        .with_postal_code("28013"),
        SubscriberRecord::new(
            "Juan Rodríguez",
            "demo_juan@example.com",
            "Avda. Diagonal 423, 08036 Barcelona",
        )
        .with_city("Barcelona")
        .with_postal_code("08036"),
        SubscriberRecord::new(
            "Carmen López",
            "demo_carmen@example.com",
            "Plaza Nueva 15, 41001 Sevilla",
        )
        .with_city("Sevilla")
        .with_postal_code("41001"),
        SubscriberRecord::new(
            "José Martínez",
            "demo_jose@example.com",
            "Calle Triana 45, 35002 Las Palmas",
        )
        .with_city("Las Palmas")
        .with_postal_code("35002"),
        SubscriberRecord::new(
            "Ana Fernández",
            "demo_ana@example.com",
            "Avenida de la Constitución 12, 46001 Valencia",
        )
        .with_city("Valencia")
        .with_postal_code("46001"),
    ];
    info!(count = roster.len(), "loaded demo subscribers");
    roster
}

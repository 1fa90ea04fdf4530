//! The two scoring tables.
//!
//! The simple table scores one point per keyword and adds URL-pattern
//! bonuses; the weighted table carries per-keyword weights and the title
//! bonus. The category sets differ between the two on purpose (Cultura vs
//! Entretenimiento/Ciencia); they are kept per profile, never merged.

use crate::{CategoryRule, ClassifierProfile};

fn rule(
    name: &'static str,
    keywords: &[&'static str],
    weight: f32,
    url_patterns: &[&'static str],
) -> CategoryRule {
    CategoryRule {
        name,
        keywords: keywords.iter().map(|k| (*k, weight)).collect(),
        url_patterns: url_patterns.to_vec(),
    }
}

pub fn simple_profile() -> ClassifierProfile {
    ClassifierProfile {
        rules: vec![
            rule(
                "Política",
                &[
                    "presidente", "gobierno", "congreso", "ministro", "político",
                    "elecciones", "partido", "ley", "reforma", "estado", "ministerio",
                    "parlamento", "votación", "democracia", "corrupción", "protesta",
                    "manifestación", "poder",
                ],
                1.0,
                &["politica", "gobierno", "congreso"],
            ),
            rule(
                "Economía",
                &[
                    "economía", "dólar", "bolsa", "mercado", "finanzas", "empresa",
                    "negocio", "inversión", "impuestos", "pbi", "crecimiento",
                    "recesión", "inflación", "banco", "financiero", "comercio",
                    "exportación", "importación", "empleo",
                ],
                1.0,
                &["economia", "finanzas", "negocios"],
            ),
            rule(
                "Deportes",
                &[
                    "fútbol", "deporte", "partido", "jugador", "equipo", "campeonato",
                    "liga", "olímpico", "atleta", "competencia", "gol", "entrenador",
                    "estadio", "tenis", "básquet", "vóley", "natación", "atletismo",
                    "motor",
                ],
                1.0,
                &["deportes", "futbol", "deporte"],
            ),
            rule(
                "Tecnología",
                &[
                    "tecnología", "digital", "internet", "software", "hardware",
                    "aplicación", "smartphone", "computadora", "inteligencia artificial",
                    "ia", "robot", "innovación", "startup", "redes sociales", "facebook",
                    "twitter", "instagram", "tiktok", "youtube", "streaming", "cloud",
                    "nube", "cripto", "bitcoin",
                ],
                1.0,
                &["tecnologia", "ciencia", "digital"],
            ),
            rule(
                "Salud",
                &[
                    "salud", "médico", "hospital", "enfermedad", "virus", "vacuna",
                    "covid", "paciente", "tratamiento", "medicina", "farmacia",
                    "epidemia", "pandemia", "bienestar", "nutrición", "ejercicio",
                    "mental", "psicológico", "terapia",
                ],
                1.0,
                &["salud", "medicina", "bienestar"],
            ),
            rule(
                "Cultura",
                &[
                    "cultura", "arte", "música", "cine", "teatro", "literatura",
                    "libro", "película", "serie", "festival", "exposición", "museo",
                    "artista", "escritor", "actor", "director", "banda", "concierto",
                    "ópera", "danza",
                ],
                1.0,
                &["cultura", "entretenimiento", "espectaculos"],
            ),
            rule(
                "Internacional",
                &[
                    "internacional", "mundial", "onu", "eeuu", "estados unidos",
                    "china", "europa", "asia", "américa", "áfrica", "tratado",
                    "acuerdo", "diplomacia", "embajada", "consulado", "migración",
                    "refugiado", "global", "geopolítica",
                ],
                1.0,
                &["internacional", "mundo", "exterior"],
            ),
        ],
        title_bonus: false,
        min_score: 0.0,
    }
}

pub fn weighted_profile() -> ClassifierProfile {
    ClassifierProfile {
        rules: vec![
            rule(
                "Política",
                &[
                    "presidente", "gobierno", "congreso", "ministro", "elección",
                    "ley", "política", "estado", "partido", "votación",
                ],
                2.0,
                &[],
            ),
            rule(
                "Deportes",
                &[
                    "fútbol", "partido", "jugador", "equipo", "gol", "liga",
                    "deporte", "competencia", "campeonato", "atleta",
                ],
                2.0,
                &[],
            ),
            rule(
                "Economía",
                &[
                    "economía", "dólar", "mercado", "empresa", "precio", "inflación",
                    "finanzas", "negocio", "comercio", "bolsa",
                ],
                2.0,
                &[],
            ),
            rule(
                "Tecnología",
                &[
                    "tecnología", "digital", "internet", "app", "software",
                    "inteligencia artificial", "redes", "ciber", "innovación",
                    "dispositivo",
                ],
                2.0,
                &[],
            ),
            rule(
                "Salud",
                &[
                    "salud", "médico", "hospital", "enfermedad", "virus", "vacuna",
                    "paciente", "medicina", "tratamiento", "cáncer",
                ],
                2.0,
                &[],
            ),
            rule(
                "Entretenimiento",
                &[
                    "película", "música", "actor", "cantante", "show", "celebridad",
                    "serie", "televisión", "concierto", "festival",
                ],
                1.5,
                &[],
            ),
            rule(
                "Ciencia",
                &[
                    "ciencia", "investigación", "estudio", "descubrimiento",
                    "científico", "espacio", "tecnología", "universidad",
                    "experimento",
                ],
                1.5,
                &[],
            ),
            rule(
                "Internacional",
                &[
                    "internacional", "mundial", "país", "nación", "global", "onu",
                    "relaciones", "diplomacia", "extranjero",
                ],
                1.5,
                &[],
            ),
        ],
        title_bonus: true,
        min_score: 1.0,
    }
}

/// Direct community-to-category mapping consulted before keyword scoring.
pub fn subreddit_category(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "futbolperuano" | "deportes" | "soccer" => Some("Deportes"),
        "economia" | "finanzas" => Some("Economía"),
        "tecnologia" | "technology" | "programming" => Some("Tecnología"),
        "salud" => Some("Salud"),
        "politica" | "politicaperu" => Some("Política"),
        "mundo" | "worldnews" => Some("Internacional"),
        _ => None,
    }
}

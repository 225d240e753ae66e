//! Level 0: Primaire.

use rand::RngCore;

use super::{boxed, Field, Level, LEVEL_NAMES};
use crate::question_engine::{
    factories::{
        date_question, definition_question, mistake_question, translation_question, MapQuestion,
        PairedMapping,
    },
    helpers::{boolean_to_answer, near_misses, shifted_values},
    models::{QuestionInstance, Subject},
    random::random_int,
};

// ---------------------------------------------------------------------------
// Chimie
// ---------------------------------------------------------------------------

fn oil_and_water(_rng: &mut dyn RngCore) -> QuestionInstance {
    QuestionInstance::new(
        "Si on verse de l'huile dans de l'eau...",
        "L'huile va flotter et former une couche au-dessus de l'eau.",
        vec![
            "L'huile va couler et former une couche en dessous de l'eau.".to_string(),
            "L'eau et l'huile vont se mélanger de façon homogène.".to_string(),
            "De petites bulles d'huile vont se former à l'intérieur de l'eau.".to_string(),
        ],
    )
    .with_course(["L'huile flotte au-dessus de l'eau car elle est moins dense."])
}

// ---------------------------------------------------------------------------
// Français
// ---------------------------------------------------------------------------

const FABLES: PairedMapping = &[
    ("Le Corbeau et le Renard", "Tout flatteur vit aux dépens de celui qui l'écoute."),
    ("Le Lièvre et la Tortue", "Rien ne sert de courir ; il faut partir à point."),
    ("Le Lion et le Rat", "On a souvent besoin d'un plus petit que soi."),
    ("Le Loup et l'Agneau", "La raison du plus fort est toujours la meilleure."),
];

const BOIS_BOIT_BOA: PairedMapping = &[
    ("bois", "substance dure et compacte des arbres."),
    ("boit", "conjugaison du verbe « boire » à la troisième personne du singulier, au présent de l'indicatif."),
    ("boa", "serpent vivant en Amérique du Sud."),
];

// ---------------------------------------------------------------------------
// Géographie
// ---------------------------------------------------------------------------

const CAPITALS_A_TO_N: PairedMapping = &[
    ("de la Turquie", "Ankara"),
    ("de la Thaïlande", "Bangkok"),
    ("de l'Australie", "Canberra"),
    ("du Sénégal", "Dakar"),
    ("du Viêt Nam", "Hanoï"),
    ("du Pakistan", "Islamabad"),
    ("de la Jamaïque", "Kingston"),
    ("du Gabon", "Libreville"),
    ("de l'Uruguay", "Montevideo"),
    ("de l'Inde", "New Delhi"),
];

const CAPITALS_O_TO_Z: PairedMapping = &[
    ("du Canada", "Ottawa"),
    ("d'Haïti", "Port-au-Prince"),
    ("de l'Équateur", "Quito"),
    ("de l'Arabie saoudite", "Riyad"),
    ("de la Bosnie-Herzégovine", "Sarajevo"),
    ("du Japon", "Tokyo"),
    ("de l'Autriche", "Vienne"),
    ("des États-Unis", "Washington D.C."),
    ("du Cameroun", "Yaoundé"),
    ("de la Croatie", "Zagreb"),
];

const EARTH_LINES: PairedMapping = &[
    ("équateur", "ligne imaginaire qui partage la Terre en 2 hémisphères"),
    ("parallèle", "cercle imaginaire parallèle à l'équateur"),
    ("méridien", "cercle fictif passant par les deux pôles de la Terre, dont le plan est perpendiculaire à celui de l'équateur"),
    ("longitude", "angle exprimant la position à l'est ou à l'ouest du méridien de Greenwich"),
    ("latitude", "angle exprimant la position au nord ou au sud de l'équateur"),
];

fn capitals(entries: PairedMapping, intro: &str) -> MapQuestion {
    MapQuestion::new(
        entries,
        "Quelle est la capitale %KEY ?",
        "De quel pays %VALUE est-elle la capitale ?",
    )
    .with_course(intro, "%VALUE est la capitale %KEY")
}

// ---------------------------------------------------------------------------
// Histoire
// ---------------------------------------------------------------------------

const FRENCH_PERIODS: PairedMapping = &[
    ("autour du Ve siècle av. J.-C.", "la Gaule celtique"),
    ("autour du Ier siècle", "l'Empire romain"),
    ("autour du Ve-VIe siècle", "le règne de Clovis"),
    ("autour du VIIIe-IXe siècle", "le règne de Charlemagne"),
    ("autour du XVe-XVIe siècle", "la Renaissance"),
    ("au XVIIIe siècle", "les Lumières"),
    ("à la fin du XVIIIe siècle", "la Révolution française"),
    ("au XIXe siècle", "la révolution industrielle"),
];

// ---------------------------------------------------------------------------
// Langues
// ---------------------------------------------------------------------------

const EN_VERBS: PairedMapping = &[
    ("manger", "to eat"),
    ("danser", "to dance"),
    ("acheter", "to buy"),
    ("donner", "to give"),
    ("lire", "to read"),
    ("apporter", "to bring"),
    ("sortir", "to go out"),
    ("dire", "to say"),
    ("savoir", "to know"),
    ("prendre", "to take"),
];

const EN_BODY: PairedMapping = &[
    ("visage", "face"),
    ("tête", "head"),
    ("pied", "foot"),
    ("bras", "arm"),
    ("main", "hand"),
    ("jambe", "leg"),
    ("torse", "chest"),
];

const EN_FACE: PairedMapping = &[
    ("cheveux", "hair"),
    ("bouche", "mouth"),
    ("nez", "nose"),
    ("oeil", "eye"),
    ("oreille", "ear"),
];

const EN_FAMILY: PairedMapping = &[
    ("père", "father"),
    ("mère", "mother"),
    ("fille", "daughter"),
    ("grand-père", "grandfather"),
    ("soeur", "sister"),
    ("neveu", "nephew"),
    ("tante", "aunt"),
    ("cousin", "cousin"),
];

const EN_HOUSE: PairedMapping = &[
    ("maison", "house"),
    ("fenêtre", "window"),
    ("cheminée", "chimney"),
    ("toit", "roof"),
    ("porte", "door"),
    ("cuisine", "kitchen"),
    ("chambre", "bedroom"),
];

const EN_TABLE: PairedMapping = &[
    ("assiette", "plate"),
    ("couteau", "knife"),
    ("cuillère", "spoon"),
    ("fourchette", "fork"),
    ("table", "table"),
    ("verre", "glass"),
];

// ---------------------------------------------------------------------------
// Maths
// ---------------------------------------------------------------------------

fn addition(rng: &mut dyn RngCore) -> QuestionInstance {
    let a = random_int(rng, 100, 2000);
    let b = random_int(rng, 100, 2000);
    let sum = a + b;
    QuestionInstance::new(
        format!("Combien vaut {a} plus {b} ?"),
        sum.to_string(),
        vec![(sum - 10).to_string(), (sum + 100).to_string(), (sum - 100).to_string()],
    )
}

fn multiplication(rng: &mut dyn RngCore) -> QuestionInstance {
    let a = random_int(rng, 10, 100);
    let b = random_int(rng, 10, 100);
    let product = a * b;
    QuestionInstance::new(
        format!("Combien vaut {a} fois {b} ?"),
        product.to_string(),
        vec![(product + 200).to_string(), (product + 100).to_string(), (product - 100).to_string()],
    )
}

fn division(rng: &mut dyn RngCore) -> QuestionInstance {
    let divisor = random_int(rng, 10, 50);
    let quotient = random_int(rng, 100, 200);
    // Off by some tens, or by a hundred: the usual carry mistakes.
    let tens = shifted_values(rng, 0, 5, 2);
    let candidates = tens
        .into_iter()
        .map(|t| quotient + 10 * t)
        .chain([quotient + 100, quotient - 100]);
    let wrong = near_misses(quotient, candidates, 3);
    QuestionInstance::new(
        format!("Combien vaut {} divisé par {divisor} ?", divisor * quotient),
        quotient.to_string(),
        wrong.iter().map(i64::to_string).collect(),
    )
}

fn parity(rng: &mut dyn RngCore) -> QuestionInstance {
    let n = random_int(rng, 1000, 2000);
    let even = n % 2 == 0;
    QuestionInstance::new(
        format!("Est-ce que {n} est pair ?"),
        boolean_to_answer(even),
        vec![boolean_to_answer(!even).to_string(), "Peut-être".to_string()],
    )
    .with_course([
        "Un nombre est pair si son dernier chiffre est 0, 2, 4, 6 ou 8.",
        "Un nombre est impair si son dernier chiffre est 1, 3, 5, 7 ou 9.",
    ])
}

// ---------------------------------------------------------------------------
// Physique
// ---------------------------------------------------------------------------

fn earth_revolution(_rng: &mut dyn RngCore) -> QuestionInstance {
    QuestionInstance::new(
        "Combien de temps met la Terre pour effectuer un tour complet autour du Soleil ?",
        "365 jours",
        vec!["24 heures".to_string(), "1 mois".to_string(), "2 ans".to_string()],
    )
    .with_course(["La Terre effectue un tour complet autour du Soleil en un an, soit environ 365 jours."])
}

const PLANETS: PairedMapping = &[
    ("1re", "Mercure"),
    ("2e", "Vénus"),
    ("3e", "Terre"),
    ("4e", "Mars"),
    ("5e", "Jupiter"),
    ("6e", "Saturne"),
    ("7e", "Uranus"),
    ("8e", "Neptune"),
];

// ---------------------------------------------------------------------------
// SVT
// ---------------------------------------------------------------------------

const ORGANS: PairedMapping = &[
    ("cerveau", "Organe chargé de gérer l'ensemble des fonctions corporelles par l'envoi de signaux nerveux."),
    ("coeur", "Organe chargé du pompage du sang dans tout le corps."),
    ("poumon", "Organe chargé d'obtenir de l'oxygène de l'environnement tout en éliminant le dioxyde de carbone."),
    ("estomac", "Organe chargé de la digestion des aliments."),
];

pub(super) fn level() -> Level {
    Level::new(
        LEVEL_NAMES[0],
        vec![
            Field::new(Subject::Chimie, vec![boxed(oil_and_water)]),
            Field::new(
                Subject::Francais,
                vec![
                    boxed(
                        MapQuestion::new(
                            FABLES,
                            "Quelle est la morale de la fable « %KEY » ?",
                            "De quelle fable de La Fontaine est tirée la morale « %VALUE » ?",
                        )
                        .with_course("Quelques morales de fables de La Fontaine...", "%KEY : « %VALUE »"),
                    ),
                    boxed(definition_question(BOIS_BOIT_BOA)),
                    // mangé, délicieuseS, pommes
                    boxed(mistake_question("J'ai manger deux délicieuse paumes aujourd'hui.", 3)),
                    // Danse, amiE
                    boxed(mistake_question("Danses avec ton ami avant qu'elle ne parte.", 2)),
                ],
            ),
            Field::new(
                Subject::Geographie,
                vec![
                    boxed(capitals(CAPITALS_A_TO_N, "Quelques métropoles mondiales...")),
                    boxed(capitals(CAPITALS_O_TO_Z, "Quelques capitales de pays...")),
                    boxed(definition_question(EARTH_LINES)),
                ],
            ),
            Field::new(Subject::Histoire, vec![boxed(date_question(FRENCH_PERIODS))]),
            Field::new(
                Subject::Langues,
                vec![
                    boxed(translation_question(EN_VERBS, "anglais")),
                    boxed(translation_question(EN_BODY, "anglais")),
                    boxed(translation_question(EN_FACE, "anglais")),
                    boxed(translation_question(EN_FAMILY, "anglais")),
                    boxed(translation_question(EN_HOUSE, "anglais")),
                    boxed(translation_question(EN_TABLE, "anglais")),
                ],
            ),
            Field::new(
                Subject::Maths,
                vec![boxed(addition), boxed(multiplication), boxed(division), boxed(parity)],
            ),
            Field::new(
                Subject::Physique,
                vec![
                    boxed(earth_revolution),
                    boxed(
                        MapQuestion::new(
                            PLANETS,
                            "Quelle est la %KEY planète la plus proche du Soleil ?",
                            "Si on classe les planètes du système solaire de la plus proche à la plus éloignée du Soleil, quelle est la position de %VALUE ?",
                        )
                        .with_course(
                            "Les 8 planètes du système solaire, de la plus proche à la plus éloignée du Soleil :",
                            "%KEY : %VALUE",
                        ),
                    ),
                ],
            ),
            Field::new(Subject::Svt, vec![boxed(definition_question(ORGANS))]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn division_is_exact_and_distractors_differ() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = division(&mut rng);
            let quotient: i64 = q.correct.parse().unwrap();
            assert!((100..200).contains(&quotient));
            assert_eq!(q.wrong.len(), 3);
            assert!(!q.wrong.contains(&q.correct));
        }
    }

    #[test]
    fn parity_answer_matches_the_number() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = parity(&mut rng);
            let n: i64 = q.statement
                .trim_start_matches("Est-ce que ")
                .split(' ')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert_eq!(q.correct, boolean_to_answer(n % 2 == 0));
            assert!(q.course.is_some());
        }
    }
}

//! Level 1: 6e.

use rand::RngCore;

use super::{boxed, Field, Level, LEVEL_NAMES};
use crate::question_engine::{
    factories::{date_question, definition_question, mistake_question, MapQuestion, PairedMapping},
    helpers::{boolean_to_answer, format_halves},
    models::{QuestionInstance, Subject},
    random::{random_int, shuffled_indices},
};

// ---------------------------------------------------------------------------
// Chimie
// ---------------------------------------------------------------------------

const HAZARD_PICTOGRAMS: PairedMapping = &[
    ("une flamme", "Hautement inflammable."),
    ("une croix", "Nocif."),
    ("une tête de mort", "Toxique."),
    ("un tube à essai dont les gouttes font des trous dans une main et dans une plaque", "Corrosif."),
    ("un arbre et un poisson morts", "Dangereux pour l'environnement."),
];

// ---------------------------------------------------------------------------
// Français
// ---------------------------------------------------------------------------

fn iliad(_rng: &mut dyn RngCore) -> QuestionInstance {
    QuestionInstance::new(
        "L'Iliade raconte les événements survenus pendant...",
        "La guerre de Troie",
        vec![
            "L'apogée d'Athènes".to_string(),
            "La guerre du Péloponnèse".to_string(),
            "Le règne d'Alexandre le Grand".to_string(),
        ],
    )
    .with_course([
        "L'Iliade est une épopée attribuée à Homère qui se déroule pendant la guerre de Troie.",
        "Les Achéens venus de toute la Grèce affrontent les Troyens et leurs alliés,",
        "chaque camp étant soutenu par diverses divinités comme Athéna, Poséidon ou Apollon.",
    ])
}

const MOLIERE: PairedMapping = &[
    ("L'Avare", "Il faut manger pour vivre et non pas vivre pour manger."),
    ("Le Bourgeois gentilhomme", "Il y a plus de quarante ans que je dis de la prose sans que j'en susse rien."),
    ("Les Fourberies de Scapin", "Que diable allait-il faire dans cette galère ?"),
    ("Tartuffe", "Couvrez ce sein que je ne saurais voir."),
];

const PORC_PORE_PORT: PairedMapping = &[
    ("porc", "cochon"),
    ("pore", "ouverture imperceptible dans la peau"),
    ("port", "endroit où les bateaux abordent"),
];

const CENT_SANG_SANS: PairedMapping = &[
    ("cent", "Numéral cardinal qui contient 10 fois 10."),
    ("sang", "Liquide rouge qui circule dans les artères et les veines des hommes et des animaux, y entretenant la vie."),
    ("sans", "Préposition marquant l'absence, le manque, l'exclusion d'une personne ou d'une chose."),
    ("sent", "conjugaison du verbe « sentir » à la troisième personne du singulier, au présent de l'indicatif."),
];

// ---------------------------------------------------------------------------
// Géographie
// ---------------------------------------------------------------------------

const RIVERS: PairedMapping = &[
    ("amont", "Partie d'un cours d'eau comprise entre un lieu déterminé et sa source."),
    ("aval", "Partie d'un cours d'eau comprise entre un lieu déterminé et son embouchure."),
    ("confluent", "Point de rencontre de 2 cours d'eau."),
    ("rivière", "Cours d'eau qui rejoint un fleuve."),
    ("fleuve", "Cours d'eau débouchant dans une mer."),
];

const LANDFORMS: PairedMapping = &[
    ("relief", "Ensemble des inégalités de la surface de la Terre."),
    ("presqu'île", "Terre reliée au continent par une étroite bande de terre."),
    ("littoral", "Bande de terre plus ou moins large qui borde la mer ou l'océan."),
    ("plateau", "Relief plus ou moins plan, dans lequel les vallées sont encaissées."),
    ("plaine", "Étendue plus ou moins plane, dans laquelle les vallées ne sont pas encaissées."),
];

const CITIES: PairedMapping = &[
    ("bidonville", "Quartier d'une ville construit avec des matériaux de récupération."),
    ("urbain", "De la ville."),
    ("rural", "Des campagnes."),
    ("métropole", "Très grande agglomération qui commande et qui dirige."),
    ("ghetto", "Quartier de ville dans lequel se rassemble une population partageant des caractères communs (langue, religion, pauvreté)."),
    ("exode rural", "Départ des habitants des campagnes vers les villes."),
];

const POPULATION: PairedMapping = &[
    ("espérance de vie", "Nombre moyen d'années de vie d'une population."),
    ("PNB", "Richesses produites par un pays en une année."),
    ("densité de population", "Nombre d'habitants qui vivent en moyenne sur 1 kilomètre carré."),
    ("accroissement naturel", "Différence entre le nombre de naissances et de décès."),
    ("contraintes naturelles", "Ensemble des éléments naturels qui font obstacle à l'installation des hommes dans un lieu."),
];

// ---------------------------------------------------------------------------
// Histoire
// ---------------------------------------------------------------------------

const EARLY_HISTORY: PairedMapping = &[
    ("vers -3500", "l'apparition des premières écritures"),
    ("à partir de -10000", "la sédentarisation et les débuts de l'agriculture"),
    ("au VIIIe siècle av. J.-C.", "la rédaction des oeuvres d'Homère et la fondation de Rome"),
    ("du VIIe siècle av. J.-C. au début de notre ère", "la rédaction de la Bible"),
];

const ANTIQUITY: PairedMapping = &[
    ("au Ve siècle av. J.-C.", "l'apogée d'Athènes au temps de Périclès"),
    ("du Ier au IIe siècle", "la paix romaine"),
    ("du Ier au IVe siècle", "les débuts du christianisme"),
    ("du IIe siècle av. J.-C. au IIe siècle ap. J.-C.", "la Chine des Han"),
];

// ---------------------------------------------------------------------------
// Maths
// ---------------------------------------------------------------------------

fn divisible_by_three(rng: &mut dyn RngCore) -> QuestionInstance {
    let n = random_int(rng, 1000, 2000);
    let divisible = n % 3 == 0;
    QuestionInstance::new(
        format!("Est-ce que {n} est divisible par 3 ?"),
        boolean_to_answer(divisible),
        vec![boolean_to_answer(!divisible).to_string(), "Peut-être".to_string()],
    )
    .with_course([
        "Un nombre est divisible par 3 si et seulement si la somme de ses chiffres est divisible par 3.",
        "Par exemple 1234 n'est pas divisible par 3 car 1 + 2 + 3 + 4 = 10 n'est pas divisible par 3.",
        "Mais 1236 est divisible par 3 car 1 + 2 + 3 + 6 = 12 = 3 × 4 est divisible par 3.",
    ])
}

fn euclidean_remainder(rng: &mut dyn RngCore) -> QuestionInstance {
    let divisor = random_int(rng, 10, 50);
    let quotient = random_int(rng, 100, 200);
    // Four distinct remainders below the divisor: the first is the real one.
    let remainders = shuffled_indices(rng, divisor as usize);
    let remainder = remainders[0] as i64;
    QuestionInstance::new(
        format!(
            "Quel est le reste de la division euclidienne de {} par {divisor} ?",
            divisor * quotient + remainder
        ),
        remainder.to_string(),
        remainders[1..4].iter().map(usize::to_string).collect(),
    )
}

// ---------------------------------------------------------------------------
// Physique
// ---------------------------------------------------------------------------

fn seasons(_rng: &mut dyn RngCore) -> QuestionInstance {
    QuestionInstance::new(
        "L'alternance des saisons est expliquée par :",
        "L'inclinaison de l'axe des pôles et la révolution de la Terre autour du Soleil.",
        vec![
            "La trajectoire elliptique de la Terre autour du Soleil et la distance qui les sépare.".to_string(),
            "La rotation de la Terre sur elle-même.".to_string(),
            "La réflexion de la lumière solaire par la Lune.".to_string(),
            "Les variations de température du Soleil au cours du temps.".to_string(),
        ],
    )
    .with_course([
        "Les saisons sont dues à l'inclinaison de l'axe des pôles, combinée à la révolution de la Terre autour du Soleil,",
        "qui fait varier l'ensoleillement selon l'orientation de la Terre vis-à-vis du rayonnement solaire.",
    ])
}

const MEASURES: PairedMapping = &[
    ("masse", "quantité de matière d'un corps, exprimée en kilogrammes"),
    ("volume", "espace occupé par un corps, exprimé en mètres cubes"),
    ("litre", "unité de volume correspondant à 1 décimètre cube"),
    ("poids", "force de la pesanteur, exprimée en newtons"),
];

const STATE_CHANGES: PairedMapping = &[
    ("solidification", "passage de l'état liquide à l'état solide"),
    ("fusion", "passage de l'état solide à l'état liquide"),
    ("vaporisation", "passage de l'état liquide à l'état gazeux"),
    ("liquéfaction", "passage de l'état gazeux à l'état liquide"),
    ("condensation", "passage de l'état gazeux à l'état solide"),
    ("sublimation", "passage de l'état solide à l'état gazeux"),
];

fn car_distance(rng: &mut dyn RngCore) -> QuestionInstance {
    let speed = random_int(rng, 50, 120);
    // Distances in half-hours of driving: 2h30 is 5 half-hours.
    let correct = 5 * speed;
    let wrong = [
        (2 * random_int(rng, 3, 5) + 1) * speed,
        2 * random_int(rng, 1, 4) * speed,
        (2 * random_int(rng, 0, 2) + 1) * speed,
    ];
    QuestionInstance::new(
        format!("En 2 heures et demie, quelle distance parcourt une voiture roulant à {speed} km/h ?"),
        format!("{} km", format_halves(correct)),
        wrong.iter().map(|&h| format!("{} km", format_halves(h))).collect(),
    )
}

// ---------------------------------------------------------------------------
// SVT
// ---------------------------------------------------------------------------

const CELLS: PairedMapping = &[
    ("membrane", "lame mince séparant l'intérieur d'une cellule de l'environnement extérieur"),
    ("cytoplasme", "milieu rencontré à l'intérieur des cellules"),
    ("noyau", "structure cellulaire contenant l'essentiel du matériel génétique"),
    ("unicellulaire", "être qui ne possède qu'une seule cellule"),
    ("spore", "organe de dispersion et de multiplication caractéristique du règne végétal"),
];

pub(super) fn level() -> Level {
    Level::new(
        LEVEL_NAMES[1],
        vec![
            Field::new(
                Subject::Chimie,
                vec![boxed(
                    MapQuestion::new(
                        HAZARD_PICTOGRAMS,
                        "Sur l'étiquette d'une substance chimique, que signifie le pictogramme représentant %KEY ?",
                        "Comment est représenté l'avertissement « %VALUE » sur l'étiquette d'une substance chimique ?",
                    )
                    .with_course("Quelques pictogrammes de danger des substances chimiques...", "%KEY : %VALUE"),
                )],
            ),
            Field::new(
                Subject::Francais,
                vec![
                    boxed(iliad),
                    boxed(
                        MapQuestion::new(
                            MOLIERE,
                            "Quelle citation de Molière est tirée de la pièce « %KEY » ?",
                            "De quelle pièce de Molière est tirée la citation « %VALUE » ?",
                        )
                        .with_course("Quelques citations de pièces de Molière...", "%KEY : « %VALUE »"),
                    ),
                    boxed(definition_question(PORC_PORE_PORT)),
                    boxed(definition_question(CENT_SANG_SANS)),
                ],
            ),
            Field::new(
                Subject::Geographie,
                vec![
                    boxed(definition_question(RIVERS)),
                    boxed(definition_question(LANDFORMS)),
                    boxed(definition_question(CITIES)),
                    boxed(definition_question(POPULATION)),
                ],
            ),
            Field::new(
                Subject::Histoire,
                vec![boxed(date_question(EARLY_HISTORY)), boxed(date_question(ANTIQUITY))],
            ),
            Field::new(
                Subject::Langues,
                vec![
                    // He goES, to THE cinema, HIS
                    boxed(mistake_question("He go to cinema with her girlfriend.", 3)),
                    // taught, yearS
                    boxed(mistake_question("She teached me music two year ago.", 2)),
                ],
            ),
            Field::new(
                Subject::Maths,
                vec![boxed(divisible_by_three), boxed(euclidean_remainder)],
            ),
            Field::new(
                Subject::Physique,
                vec![
                    boxed(seasons),
                    boxed(definition_question(MEASURES)),
                    boxed(definition_question(STATE_CHANGES)),
                    boxed(car_distance),
                ],
            ),
            Field::new(Subject::Svt, vec![boxed(definition_question(CELLS))]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn remainder_is_below_divisor() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = euclidean_remainder(&mut rng);
            let numbers: Vec<i64> = q.statement
                .split(|c: char| !c.is_ascii_digit())
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().unwrap())
                .collect();
            let (dividend, divisor) = (numbers[0], numbers[1]);
            assert_eq!((dividend % divisor).to_string(), q.correct);
            for w in &q.wrong {
                assert!(w.parse::<i64>().unwrap() < divisor);
            }
        }
    }

    #[test]
    fn car_distance_is_two_and_a_half_hours() {
        let mut rng = StdRng::seed_from_u64(8);
        let q = car_distance(&mut rng);
        let speed: i64 = q.statement
            .split(" km/h")
            .next()
            .and_then(|s| s.rsplit(' ').next())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(q.correct, format!("{} km", format_halves(5 * speed)));
        assert!(q.wrong.iter().all(|w| w.ends_with(" km")));
    }
}

//! Level 2: 5e.

use rand::{Rng, RngCore};

use super::{boxed, Field, Level, LEVEL_NAMES};
use crate::question_engine::{
    factories::{
        date_question, definition_question, mistake_question, translation_question, MapQuestion,
        PairedMapping,
    },
    helpers::{format_decimal, near_misses},
    models::{QuestionInstance, Subject},
    random::{pick_random, random_int},
};

// ---------------------------------------------------------------------------
// Chimie
// ---------------------------------------------------------------------------

const DISSOLUTION: PairedMapping = &[
    ("le sucre", "le soluté"),
    ("l'eau", "le solvant"),
    ("l'eau sucrée", "la solution"),
    ("l'eau sucrée qui ne dissout plus le sucre", "la solution saturée"),
];

const PH_SCALE: PairedMapping = &[
    ("solution quelconque", "0 ≤ pH ≤ 14"),
    ("solution acide", "0 ≤ pH < 7"),
    ("solution basique", "7 < pH ≤ 14"),
    ("solution neutre", "pH = 7"),
];

const MIXTURES: PairedMapping = &[
    ("corps pur", "substance composée d'une seule espèce chimique"),
    ("mélange", "substance composée de plusieurs espèces chimiques"),
    ("mélange homogène", "mélange pour lequel on ne distingue pas les constituants"),
    ("mélange hétérogène", "mélange pour lequel on distingue les constituants"),
    ("liquides miscibles / liquide et solide solubles", "constituants qui donnent un mélange homogène"),
    ("liquides non miscibles / liquide et solide insolubles", "constituants qui donnent un mélange hétérogène"),
    ("solubilité", "masse maximale de solide qu'on peut dissoudre dans un litre de solvant"),
];

// ---------------------------------------------------------------------------
// Français
// ---------------------------------------------------------------------------

fn medieval_literature(_rng: &mut dyn RngCore) -> QuestionInstance {
    QuestionInstance::new(
        "Quelle oeuvre n'est pas tirée de la littérature du Moyen Âge ?",
        "Don Quichotte",
        vec![
            "La Chanson de Roland".to_string(),
            "Perceval ou le Conte du Graal".to_string(),
            "Tristan et Iseut".to_string(),
        ],
    )
    .with_course([
        "Don Quichotte est un roman écrit par Miguel de Cervantes, publié au début du XVIIe siècle : une parodie des moeurs médiévales et de l'idéal chevaleresque.",
    ])
}

const AU_EAU_HAUT_OS: PairedMapping = &[
    ("au", "Contraction de « à le »."),
    ("eau", "Liquide consommé en tant que boisson."),
    ("haut", "Qui a une certaine dimension dans le sens vertical."),
    ("os", "Organe dur et solide qui constitue la charpente des hommes et des vertébrés."),
];

const COMPTE_COMTE_CONTE: PairedMapping = &[
    ("compte", "État ou autre écrit comprenant l'énumération, le calcul et autres supputations de ce qui a été reçu et dépensé."),
    ("comte", "Titre de noblesse qui vient au-dessous de celui du marquis."),
    ("conte", "Court récit d'aventures imaginaires, soit vraisemblable, soit merveilleux."),
];

const BAL_BALE_BALLE: PairedMapping = &[
    ("bal", "Assemblée où l'on danse."),
    ("Bâle", "Ville de Suisse."),
    ("balle", "Petite sphère qui rebondit, utilisée dans certains jeux."),
];

// ---------------------------------------------------------------------------
// Géographie
// ---------------------------------------------------------------------------

const AGRICULTURE: PairedMapping = &[
    ("agriculture biologique", "Système de culture qui n'utilise pas de pesticides ou d'engrais chimiques."),
    ("agriculture durable", "Agriculture qui répond aux besoins des populations actuelles sans compromettre la capacité des populations futures à répondre aux leurs."),
    ("agriculture productiviste", "Agriculture qui cherche une production maximale et des rendements élevés en utilisant les techniques les plus efficaces (machines, engrais, pesticides, OGM...)."),
    ("agriculture vivrière", "Agriculture destinée à nourrir les paysans qui la produisent."),
];

const DEVELOPMENT: PairedMapping = &[
    ("pays développé", "Pays riche où la majorité de la population a accès à tous ses besoins vitaux ainsi qu'à un certain confort."),
    ("pays du Nord", "Ensemble des pays riches et développés, situés principalement dans l'hémisphère nord."),
    ("pays du Sud", "Ensemble des pays pauvres et en développement, situés au sud de l'Amérique du Nord et de l'Europe."),
    ("pays émergent", "Pays connaissant une croissance économique forte mais dont le niveau de développement de la population est encore faible."),
    ("pays enclavé", "Pays qui n'a pas accès à la mer."),
];

// ---------------------------------------------------------------------------
// Histoire
// ---------------------------------------------------------------------------

const EARLY_MIDDLE_AGES: PairedMapping = &[
    ("en 622", "l'Hégire"),
    ("en 800", "le sacre de Charlemagne"),
    ("en 987", "le couronnement et le sacre d'Hugues Capet"),
    ("en 1054", "le schisme des Églises d'Orient et d'Occident"),
    ("entre 1096 et 1099", "la première croisade"),
];

const LATE_MIDDLE_AGES: PairedMapping = &[
    ("en 1204", "le sac de Constantinople"),
    ("en 1214", "la bataille de Bouvines"),
    ("en 1453", "la prise de Constantinople"),
    ("entre 1337 et 1453", "la guerre de Cent Ans"),
];

const EARLY_MODERN: PairedMapping = &[
    ("en 1492", "le premier voyage de Christophe Colomb"),
    ("en 1598", "l'édit de Nantes"),
    ("en 1517", "les 95 thèses de Luther"),
    ("entre 1661 et 1715", "le règne de Louis XIV"),
];

// ---------------------------------------------------------------------------
// Langues
// ---------------------------------------------------------------------------

const ES_VERBS: PairedMapping = &[
    ("manger", "comer"),
    ("danser", "bailar"),
    ("acheter", "comprar"),
    ("donner", "dar"),
    ("lire", "leer"),
    ("apporter", "traer"),
    ("sortir", "salir"),
    ("dire", "decir"),
    ("savoir", "saber"),
    ("prendre", "tomar"),
];

const ES_BODY: PairedMapping = &[
    ("visage", "cara"),
    ("tête", "cabeza"),
    ("pied", "pie"),
    ("bras", "brazo"),
    ("main", "mano"),
    ("jambe", "pierna"),
    ("torse", "torso"),
];

const ES_FACE: PairedMapping = &[
    ("cheveux", "cabello"),
    ("bouche", "boca"),
    ("nez", "nariz"),
    ("oeil", "ojo"),
    ("oreille", "oreja"),
];

const ES_FAMILY: PairedMapping = &[
    ("père", "padre"),
    ("mère", "madre"),
    ("fille", "hija"),
    ("grand-père", "abuelo"),
    ("soeur", "hermana"),
    ("neveu", "sobrino"),
    ("tante", "tía"),
    ("cousin", "primo"),
];

const ES_HOUSE: PairedMapping = &[
    ("maison", "casa"),
    ("fenêtre", "ventana"),
    ("cheminée", "chimenea"),
    ("toit", "techo"),
    ("porte", "puerta"),
    ("cuisine", "cocina"),
    ("chambre", "habitación"),
];

const ES_TABLE: PairedMapping = &[
    ("assiette", "plato"),
    ("couteau", "cuchillo"),
    ("cuillère", "cuchara"),
    ("fourchette", "tenedor"),
    ("table", "mesa"),
    ("verre", "vaso"),
];

// ---------------------------------------------------------------------------
// Maths
// ---------------------------------------------------------------------------

/// Two relative integers, one of them negative, in random order.
fn relative_operands(rng: &mut dyn RngCore) -> (i64, i64) {
    let a = random_int(rng, -10, -1);
    let b = random_int(rng, -10, 11);
    if rng.gen_bool(0.5) { (b, a) } else { (a, b) }
}

/// Negative numbers are parenthesised when they follow an operator.
fn operand(v: i64) -> String {
    if v < 0 { format!("({v})") } else { v.to_string() }
}

fn relative_addition(rng: &mut dyn RngCore) -> QuestionInstance {
    let (a, b) = relative_operands(rng);
    let correct = a + b;
    let wrong = near_misses(correct, [a - b, -a - b, b - a], 3);
    QuestionInstance::new(
        format!("Combien vaut {a} plus {} ?", operand(b)),
        correct.to_string(),
        wrong.iter().map(i64::to_string).collect(),
    )
}

fn relative_subtraction(rng: &mut dyn RngCore) -> QuestionInstance {
    let (a, b) = relative_operands(rng);
    let correct = a - b;
    let wrong = near_misses(correct, [a + b, -a - b, b - a], 3);
    QuestionInstance::new(
        format!("Combien vaut {a} moins {} ?", operand(b)),
        correct.to_string(),
        wrong.iter().map(i64::to_string).collect(),
    )
}

// ---------------------------------------------------------------------------
// Physique
// ---------------------------------------------------------------------------

const CIRCUIT_SYMBOLS: PairedMapping = &[
    ("une pile", "deux barres parallèles (l'une grosse et courte, l'autre fine et longue)"),
    ("une résistance", "un rectangle"),
    ("une connexion", "un point"),
    ("un interrupteur", "un segment qui s'ouvre ou se ferme tel un portail"),
    ("une lampe", "un rond avec une croix à l'intérieur"),
    ("une diode", "un triangle avec une barre"),
    ("une diode électroluminescente", "un triangle avec une barre et des flèches"),
    ("un moteur", "un rond avec la lettre M à l'intérieur"),
];

fn cubic_meters(mantissa: i64, exp10: i32) -> String {
    format!("{} mètres cubes", format_decimal(mantissa, exp10))
}

fn millilitres_to_cubic_meters(rng: &mut dyn RngCore) -> QuestionInstance {
    let digit = random_int(rng, 1, 10);
    let exp10 = random_int(rng, 6, 8) as i32;
    let millilitres = digit * 10i64.pow(exp10 as u32);
    // 1 mL = 10^-6 m³
    let exp_m3 = exp10 - 6;
    let off_by_one = pick_random(rng, &[-1, 1]).copied().unwrap_or(1);
    let off_by_two = pick_random(rng, &[-2, 2]).copied().unwrap_or(2);
    QuestionInstance::new(
        format!("À quoi sont égaux {millilitres} millilitres ?"),
        cubic_meters(digit, exp_m3),
        vec![
            cubic_meters(digit, exp_m3 + off_by_one),
            cubic_meters(digit, exp_m3 + off_by_two),
            format!("{millilitres} décimètres cubes"),
        ],
    )
    .with_course([
        "1 décimètre est égal à 0.1 mètre.",
        "1 décimètre cube est égal à 0.001 mètre cube.",
        "1 décimètre cube est égal à 1 litre.",
        "1 millilitre est égal à 0.001 litre.",
    ])
}

// ---------------------------------------------------------------------------
// SVT
// ---------------------------------------------------------------------------

const ORGANISMS: PairedMapping = &[
    ("enzymes", "molécules produites par les organes digestifs permettant la fabrication de nutriments à partir des aliments"),
    ("synapse", "région d'interaction entre deux cellules nerveuses par laquelle passe un message chimique"),
    ("branchie", "organe respiratoire des animaux aquatiques"),
    ("chloroplaste", "organite spécifique des cellules végétales, lieu de la photosynthèse"),
];

pub(super) fn level() -> Level {
    Level::new(
        LEVEL_NAMES[2],
        vec![
            Field::new(
                Subject::Chimie,
                vec![
                    boxed(
                        MapQuestion::new(
                            DISSOLUTION,
                            "On mélange du sucre et de l'eau. Comment appelle-t-on %KEY ?",
                            "On mélange du sucre et de l'eau. Qu'est-ce que %VALUE ?",
                        )
                        .with_course("Quelques concepts de la dissolution dans l'eau...", "%KEY est appelé(e) %VALUE"),
                    ),
                    boxed(
                        MapQuestion::new(
                            PH_SCALE,
                            "À quel pH correspond une %KEY ?",
                            "À quel type de solution correspond %VALUE ?",
                        )
                        .with_course("Définition du pH d'une solution...", "%KEY : %VALUE"),
                    ),
                    boxed(definition_question(MIXTURES)),
                ],
            ),
            Field::new(
                Subject::Francais,
                vec![
                    boxed(medieval_literature),
                    boxed(definition_question(AU_EAU_HAUT_OS)),
                    boxed(definition_question(COMPTE_COMTE_CONTE)),
                    boxed(definition_question(BAL_BALE_BALLE)),
                ],
            ),
            Field::new(
                Subject::Geographie,
                vec![boxed(definition_question(AGRICULTURE)), boxed(definition_question(DEVELOPMENT))],
            ),
            Field::new(
                Subject::Histoire,
                vec![
                    boxed(date_question(EARLY_MIDDLE_AGES)),
                    boxed(date_question(LATE_MIDDLE_AGES)),
                    boxed(date_question(EARLY_MODERN)),
                ],
            ),
            Field::new(
                Subject::Langues,
                vec![
                    boxed(translation_question(ES_VERBS, "espagnol")),
                    boxed(translation_question(ES_BODY, "espagnol")),
                    boxed(translation_question(ES_FACE, "espagnol")),
                    boxed(translation_question(ES_FAMILY, "espagnol")),
                    boxed(translation_question(ES_HOUSE, "espagnol")),
                    boxed(translation_question(ES_TABLE, "espagnol")),
                    // Me gustaN, manZanas
                    boxed(mistake_question("Me gusta mucho las mansanas rojas.", 2)),
                    // Él, A su, amigA, para
                    boxed(mistake_question("El espera su amigo por ir a la playa con ella.", 4)),
                    boxed(mistake_question("He has become a new person since he left her.", 0)),
                ],
            ),
            Field::new(
                Subject::Maths,
                vec![boxed(relative_addition), boxed(relative_subtraction)],
            ),
            Field::new(
                Subject::Physique,
                vec![
                    boxed(
                        MapQuestion::new(
                            CIRCUIT_SYMBOLS,
                            "Dans un circuit électrique, comment représente-t-on %KEY ?",
                            "Dans un circuit électrique, quel composant est représenté par %VALUE ?",
                        )
                        .with_course("Comment schématiser les composants d'un circuit électrique...", "on représente %KEY par %VALUE"),
                    ),
                    boxed(millilitres_to_cubic_meters),
                ],
            ),
            Field::new(Subject::Svt, vec![boxed(definition_question(ORGANISMS))]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn relative_sums_never_repeat_the_answer() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            for q in [relative_addition(&mut rng), relative_subtraction(&mut rng)] {
                assert_eq!(q.wrong.len(), 3, "{}", q.statement);
                assert!(!q.wrong.contains(&q.correct), "{}", q.statement);
                let mut unique = q.wrong.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), 3, "{}", q.statement);
            }
        }
    }

    #[test]
    fn volume_conversion_uses_exact_decimals() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = millilitres_to_cubic_meters(&mut rng);
            assert!(q.correct.ends_with(" mètres cubes"));
            for w in q.wrong.iter().chain([&q.correct]) {
                assert!(!w.contains("0000000001"), "floating noise in {w}");
            }
            assert!(!q.wrong.contains(&q.correct));
        }
    }

    #[test]
    fn operand_parenthesises_negatives() {
        assert_eq!(operand(-4), "(-4)");
        assert_eq!(operand(4), "4");
    }
}

//! Level 3: 4e.

use rand::{Rng, RngCore};

use super::{boxed, Field, Level, LEVEL_NAMES};
use crate::question_engine::{
    factories::{date_question, definition_question, mistake_question, MapQuestion, PairedMapping},
    helpers::{distinct_texts, format_decimal, gcd, near_misses, shifted_values},
    models::{QuestionInstance, Subject},
    random::random_int,
};

// ---------------------------------------------------------------------------
// Chimie
// ---------------------------------------------------------------------------

const ATOMS: PairedMapping = &[
    ("d'hydrogène", "H"),
    ("de carbone", "C"),
    ("d'azote", "N"),
    ("d'oxygène", "O"),
    ("de soufre", "S"),
    ("de chlore", "Cl"),
];

const MOLECULES: PairedMapping = &[
    ("de dioxygène", "O2"),
    ("d'eau", "H2O"),
    ("de dioxyde de carbone", "CO2"),
    ("de méthane", "CH4"),
    ("de diazote", "N2"),
    ("de chlorure de méthyle", "CH3Cl"),
    ("de dioxyde de soufre", "SO2"),
];

const AIR: PairedMapping = &[
    ("diazote", "environ 78 %"),
    ("dioxygène", "environ 21 %"),
    ("dioxyde de carbone", "environ 0,04 %"),
    ("gaz rares (argon, néon, ...)", "moins de 1 %"),
];

// ---------------------------------------------------------------------------
// Français
// ---------------------------------------------------------------------------

const CYRANO_NOSE: PairedMapping = &[
    ("Descriptif", "C'est un roc ! c'est un pic ! c'est un cap ! Que dis-je, c'est un cap ? C'est une péninsule !"),
    ("Gracieux", "Aimez-vous à ce point les oiseaux Que paternellement vous vous préoccupâtes De tendre ce perchoir à leurs petites pattes ?"),
    ("Pédant", "L'animal seul, monsieur, qu'Aristophane Appelle Hippocampéléphantocamélos Dut avoir sous le front tant de chair sur tant d'os !"),
    ("Cavalier", "Quoi, l'ami, ce croc est à la mode ? Pour pendre son chapeau, c'est vraiment très commode !"),
    ("Dramatique", "C'est la mer Rouge quand il saigne !"),
    ("Admiratif", "Pour un parfumeur, quelle enseigne !"),
];

const FLEURS_DU_MAL: PairedMapping = &[
    ("L'Albatros", "Exilé sur le sol au milieu des huées, Ses ailes de géant l'empêchent de marcher."),
    ("L'Invitation au voyage", "Là, tout n'est qu'ordre et beauté, Luxe, calme et volupté."),
    ("Le Balcon", "Ô serments ! ô parfums ! ô baisers infinis !"),
    ("Le Serpent qui danse", "Je crois boire un vin de Bohême, Amer et vainqueur, Un ciel liquide qui parsème D'étoiles mon coeur !"),
    ("Spleen (Quand le ciel bas...)", "l'Espoir, Vaincu, pleure, et l'Angoisse atroce, despotique, Sur mon crâne incliné plante son drapeau noir."),
    ("Une charogne", "Alors, ô ma beauté ! dites à la vermine Qui vous mangera de baisers, Que j'ai gardé la forme et l'essence divine De mes amours décomposés !"),
    ("À une passante", "Car j'ignore où tu fuis, tu ne sais où je vais, Ô toi que j'eusse aimée, ô toi qui le savais !"),
];

const SHAH_CHAS_CHAT: PairedMapping = &[
    ("shah", "Titre que les Européens donnent au souverain de la Perse."),
    ("chas", "Trou d'une aiguille par lequel on passe le fil."),
    ("chat", "Animal domestique carnassier de la famille des félins."),
];

const PERE_PAIRE_PAIR: PairedMapping = &[
    ("père", "Celui qui a un ou plusieurs enfants."),
    ("paire", "Deux choses de même espèce, qui vont nécessairement ou ordinairement ensemble."),
    ("pair", "Qui est égal, semblable, pareil."),
    ("pers", "D'une couleur entre le vert et le bleu."),
    ("perds", "conjugaison du verbe « perdre » à la deuxième personne du singulier, au présent de l'indicatif."),
];

const BOUE_BOUS_BOUT: PairedMapping = &[
    ("boue", "Fange des rues et des chemins."),
    ("bous", "conjugaison du verbe « bouillir » à la deuxième personne du singulier, au présent de l'indicatif."),
    ("bout", "Extrémité d'un corps, d'un espace."),
];

// ---------------------------------------------------------------------------
// Géographie
// ---------------------------------------------------------------------------

const TOURISM: PairedMapping = &[
    ("tourisme de masse", "Type de tourisme que l'on trouve dans des espaces aménagés pour accueillir un grand nombre de voyageurs, à des prix abordables."),
    ("tourisme international", "Tourisme pratiqué en dehors du pays de résidence."),
    ("tourisme vert", "Tourisme centré sur la découverte et le respect de l'environnement."),
    ("tourisme durable", "Tourisme proposant des activités qui ménagent les équilibres économiques, sociaux et environnementaux."),
    ("tourisme équitable", "Forme de tourisme favorisant l'amélioration des conditions de vie des communautés locales."),
];

const DEMOGRAPHY: PairedMapping = &[
    ("taux d'évolution de la population", "Mesure de l'accroissement global de la population."),
    ("taux de fécondité", "Nombre moyen d'enfants par femme."),
    ("taux de pauvreté", "Part de la population vivant avec moins de 1,90 $ par jour selon l'ONU."),
    ("taux d'urbanisation", "Part de la population d'un pays qui habite dans un espace urbain."),
];

// ---------------------------------------------------------------------------
// Histoire
// ---------------------------------------------------------------------------

const ENLIGHTENMENT: PairedMapping = &[
    ("entre 1751 et 1772", "l'édition de l'Encyclopédie"),
    ("entre 1670 et 1750", "l'essor de la traite négrière"),
    ("en 1789", "le début de la Révolution française"),
    ("entre 1799 et 1815", "le règne de Napoléon Bonaparte"),
];

const NINETEENTH_CENTURY: PairedMapping = &[
    ("entre février et juillet 1848", "le Printemps des peuples"),
    ("en avril 1848", "la seconde abolition de l'esclavage"),
    ("en mars 1848", "l'instauration du suffrage universel masculin"),
    ("entre 1870 et 1880", "le début de la seconde révolution industrielle"),
    ("en septembre 1870", "la naissance de la IIIe République"),
];

const THIRD_REPUBLIC: PairedMapping = &[
    ("en 1882", "l'instauration de l'école gratuite, laïque et obligatoire"),
    ("entre 1870 et 1914", "la seconde mondialisation et la relance de la colonisation"),
    ("entre 1894 et 1906", "l'affaire Dreyfus"),
    ("en 1900", "l'Exposition universelle de Paris"),
    ("en 1905", "la loi de séparation des Églises et de l'État"),
];

// ---------------------------------------------------------------------------
// Maths
// ---------------------------------------------------------------------------

fn relative_multiplication(rng: &mut dyn RngCore) -> QuestionInstance {
    let (mut a, mut b) = (random_int(rng, -10, -1), random_int(rng, -10, 11));
    if rng.gen_bool(0.5) {
        std::mem::swap(&mut a, &mut b);
    }
    let correct = a * b;
    let wrong = near_misses(correct, [-a * b, a + b, a - b], 3);
    let rhs = if b < 0 { format!("({b})") } else { b.to_string() };
    QuestionInstance::new(
        format!("Combien vaut {a} fois {rhs} ?"),
        correct.to_string(),
        wrong.iter().map(i64::to_string).collect(),
    )
}

fn centimeters(millimeters: i64) -> String {
    format!("{} cm", format_decimal(millimeters, -1))
}

/// Missing side of a right triangle built from a Pythagorean triple.
fn pythagoras(rng: &mut dyn RngCore) -> QuestionInstance {
    let q = random_int(rng, 4, 10);
    let p = random_int(rng, q + 2, q + 6);
    // Euclid's formula, lengths in millimeters.
    let hypotenuse = p * p + q * q;
    let leg_a = p * p - q * q;
    let leg_b = 2 * p * q;
    let sides = [hypotenuse, leg_a, leg_b];
    let unknown = random_int(rng, 0, 3) as usize;

    let shown: Vec<String> = sides
        .iter()
        .enumerate()
        .map(|(i, &s)| if i == unknown { "? cm".to_string() } else { centimeters(s) })
        .collect();
    let wrong = shifted_values(rng, sides[unknown], 7, 3);
    QuestionInstance::new(
        format!(
            "Quel est le côté manquant du triangle ABC rectangle en A tel que BC = {}, AC = {}, AB = {} ?",
            shown[0], shown[1], shown[2]
        ),
        centimeters(sides[unknown]),
        wrong.into_iter().map(centimeters).collect(),
    )
    .with_course(["Dans un triangle rectangle, le carré de l'hypoténuse est égal à la somme des carrés des deux autres côtés."])
}

fn irreducible_fraction(rng: &mut dyn RngCore) -> QuestionInstance {
    let a0 = random_int(rng, 2, 5);
    let b0 = random_int(rng, a0 + 1, 10);
    let f = random_int(rng, 2, 5);
    let (a, b, d) = (a0 * f, b0 * f, gcd(a0, b0) * f);
    let (num, den) = (a / d, b / d);

    let off_by_one = if a > d { format!("{}/{den}", num - 1) } else { format!("{}/{den}", num + 1) };
    let partial = if d > f { format!("{}/{}", a / f, b / f) } else { format!("{}/{den}", num + 2) };
    let correct = format!("{num}/{den}");
    let wrong = distinct_texts(&correct, [format!("{a}/{b}"), off_by_one, partial]);
    QuestionInstance::new(
        format!("Quelle est la forme irréductible de la fraction {a}/{b} ?"),
        correct.clone(),
        wrong,
    )
    .with_course([
        "Une fraction est irréductible si on ne peut pas diviser son numérateur et son dénominateur par un même nombre.".to_string(),
        format!("Par exemple {a}/{b} n'est pas irréductible car on peut diviser {a} et {b} par {d}."),
        format!("On obtient {correct} qui est une fraction irréductible."),
    ])
}

fn hundredths_cm(hundredths: i64) -> String {
    format!("{} cm", format_decimal(hundredths, -2))
}

/// Intercept theorem: AN = AC × AM / AB, rounded to the hundredth.
fn thales(rng: &mut dyn RngCore) -> QuestionInstance {
    let am = random_int(rng, 2, 5);
    let ab = random_int(rng, am + 1, am + 5);
    let ac = random_int(rng, ab + 1, ab + 5);
    let an = (200 * ac * am + ab) / (2 * ab);
    let wrong: Vec<i64> = shifted_values(rng, 0, 5, 3).into_iter().map(|d| an + 10 * d).collect();
    QuestionInstance::new(
        format!(
            "Soit ABC un triangle, M un point de [AB] et N un point de [AC]. Si (MN) est parallèle à (BC), \
             AB = {ab} cm, AC = {ac} cm et AM = {am} cm, quelle est la meilleure valeur approchée de AN ?"
        ),
        hundredths_cm(an),
        wrong.into_iter().map(hundredths_cm).collect(),
    )
}

// ---------------------------------------------------------------------------
// Physique
// ---------------------------------------------------------------------------

fn ohms_law(rng: &mut dyn RngCore) -> QuestionInstance {
    let current = random_int(rng, 2, 10);
    let resistance = 2 * random_int(rng, 50, 100);
    let voltage = current * resistance;
    let wrong = near_misses(
        voltage,
        [resistance * current * current / 2, 2 * voltage, current + resistance],
        3,
    );
    QuestionInstance::new(
        format!(
            "Quelle est la tension aux bornes d'un conducteur ohmique de résistance {resistance} Ω traversé par un courant de {current} A ?"
        ),
        format!("{voltage} V"),
        wrong.iter().map(|v| format!("{v} V")).collect(),
    )
    .with_course([
        "La loi d'Ohm s'écrit U = R × I,",
        "où U est la tension en volts,",
        "R la résistance en ohms",
        "et I l'intensité en ampères.",
    ])
}

const SPEEDS: PairedMapping = &[
    ("vitesse de la lumière dans le vide", "300 000 km/s"),
    ("vitesse du son dans l'air", "340 m/s"),
    ("vitesse du son dans l'eau", "1 500 m/s"),
    ("vitesse de la lumière dans l'eau", "225 000 km/s"),
];

// ---------------------------------------------------------------------------
// SVT
// ---------------------------------------------------------------------------

const GEOLOGY: PairedMapping = &[
    ("magma", "matériau se formant à l'intérieur de la Terre et formant une roche en refroidissant"),
    ("dorsales océaniques", "chaînes de montagnes sous-marines formées le long des zones de divergence des plaques tectoniques"),
    ("plaque tectonique", "fragment de l'enveloppe rigide de la surface de la Terre"),
    ("volcan", "structure géologique qui résulte de la montée d'un magma puis de l'éruption de matériaux"),
    ("subduction", "processus par lequel une plaque tectonique océanique s'incurve et plonge sous une autre plaque"),
    ("lave en coussin", "roche émise par un volcan sous-marin lors d'une éruption"),
    ("séisme", "secousse du sol résultant de la libération brusque d'énergie accumulée par les contraintes exercées sur les roches"),
];

pub(super) fn level() -> Level {
    Level::new(
        LEVEL_NAMES[3],
        vec![
            Field::new(
                Subject::Chimie,
                vec![
                    boxed(
                        MapQuestion::new(
                            ATOMS,
                            "Quel est le symbole de l'atome %KEY ?",
                            "%VALUE est le symbole de l'atome...",
                        )
                        .with_course("Quelques symboles d'atomes...", "%VALUE est le symbole de l'atome %KEY"),
                    ),
                    boxed(
                        MapQuestion::new(
                            MOLECULES,
                            "Quelle est la formule de la molécule %KEY ?",
                            "%VALUE est la formule de la molécule...",
                        )
                        .with_course("Quelques formules chimiques...", "%VALUE est la formule de la molécule %KEY"),
                    ),
                    boxed(
                        MapQuestion::new(
                            AIR,
                            "Quel est le pourcentage de %KEY dans l'air ?",
                            "Quel gaz de l'air correspond au pourcentage « %VALUE » ?",
                        )
                        .with_course("Composition de l'air...", "%KEY : %VALUE"),
                    ),
                ],
            ),
            Field::new(
                Subject::Francais,
                vec![
                    boxed(
                        MapQuestion::new(
                            CYRANO_NOSE,
                            "Quel énoncé correspond à la description « %KEY » dans la tirade du nez de Cyrano de Bergerac ?",
                            "Quelle description correspond à l'énoncé « %VALUE » dans la tirade du nez de Cyrano de Bergerac ?",
                        )
                        .with_course(
                            "Quelques extraits de la tirade du nez de la pièce de théâtre Cyrano de Bergerac...",
                            "%KEY : « %VALUE »",
                        ),
                    ),
                    boxed(
                        MapQuestion::new(
                            FLEURS_DU_MAL,
                            "Quels sont les derniers vers du poème « %KEY » des Fleurs du mal ?",
                            "De quel poème de Baudelaire sont tirés les vers « %VALUE » ?",
                        )
                        .with_course("Quelques citations des Fleurs du mal de Charles Baudelaire...", "%KEY : « %VALUE »"),
                    ),
                    boxed(definition_question(SHAH_CHAS_CHAT)),
                    boxed(definition_question(PERE_PAIRE_PAIR)),
                    boxed(definition_question(BOUE_BOUS_BOUT)),
                ],
            ),
            Field::new(
                Subject::Geographie,
                vec![boxed(definition_question(TOURISM)), boxed(definition_question(DEMOGRAPHY))],
            ),
            Field::new(
                Subject::Histoire,
                vec![
                    boxed(date_question(ENLIGHTENMENT)),
                    boxed(date_question(NINETEENTH_CENTURY)),
                    boxed(date_question(THIRD_REPUBLIC)),
                ],
            ),
            Field::new(
                Subject::Langues,
                vec![
                    // I visited, There were
                    boxed(mistake_question("I have visited Paris last year. There was many tourists.", 2)),
                    // men, nicest, met
                    boxed(mistake_question("These two mans are the most nice people I have ever meeted.", 3)),
                    // does
                    boxed(mistake_question("She do not seem very young. How old is she?", 1)),
                ],
            ),
            Field::new(
                Subject::Maths,
                vec![
                    boxed(relative_multiplication),
                    boxed(pythagoras),
                    boxed(irreducible_fraction),
                    boxed(thales),
                ],
            ),
            Field::new(
                Subject::Physique,
                vec![
                    boxed(ohms_law),
                    boxed(
                        MapQuestion::new(
                            SPEEDS,
                            "Quelle est la %KEY ?",
                            "À quoi correspond %VALUE ?",
                        )
                        .with_course("Quelques vitesses du son et de la lumière...", "La %KEY est de %VALUE"),
                    ),
                ],
            ),
            Field::new(Subject::Svt, vec![boxed(definition_question(GEOLOGY))]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pythagorean_triples_are_right_triangles() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = pythagoras(&mut rng);
            assert_eq!(q.statement.matches("? cm").count(), 1, "{}", q.statement);
            assert!(q.correct.ends_with(" cm"));
            assert_eq!(q.wrong.len(), 3);
            assert!(!q.wrong.contains(&q.correct));
        }
    }

    #[test]
    fn irreducible_fraction_is_reduced() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = irreducible_fraction(&mut rng);
            let (num, den) = q.correct.split_once('/').unwrap();
            let (num, den): (i64, i64) = (num.parse().unwrap(), den.parse().unwrap());
            assert_eq!(gcd(num, den), 1, "{}", q.correct);
            assert_eq!(q.wrong.len(), 3, "{:?}", q.wrong);
        }
    }

    #[test]
    fn thales_rounds_to_hundredths() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = thales(&mut rng);
            let value = q.correct.trim_end_matches(" cm");
            let decimals = value.split_once('.').map_or(0, |(_, d)| d.len());
            assert!(decimals <= 2, "{value}");
        }
    }

    #[test]
    fn ohms_law_distractors_stay_distinct_for_small_currents() {
        // With I = 2, R × I² / 2 equals U: the distractor must be replaced.
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = ohms_law(&mut rng);
            assert_eq!(q.wrong.len(), 3);
            assert!(!q.wrong.contains(&q.correct), "{}", q.statement);
        }
    }
}

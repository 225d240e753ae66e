//! Level 4: 3e and above.

use rand::RngCore;

use super::{boxed, Field, Level, LEVEL_NAMES};
use crate::question_engine::{
    factories::{
        date_question, definition_question, mistake_question, translation_question, MapQuestion,
        PairedMapping,
    },
    helpers::{format_decimal, format_halves, gcd, lcm, near_misses, shifted_values},
    models::{QuestionInstance, Subject},
    random::random_int,
};

// ---------------------------------------------------------------------------
// Chimie
// ---------------------------------------------------------------------------

const IONS: PairedMapping = &[
    ("Cl-", "chlorure"),
    ("Fe2+", "fer II"),
    ("Na+", "sodium"),
    ("SO4 2-", "sulfate"),
    ("Fe3+", "fer III"),
    ("Cu2+", "cuivre II"),
    ("Al3+", "aluminium"),
    ("NO3-", "nitrate"),
    ("Zn2+", "zinc"),
    ("HO-", "hydroxyde"),
    ("H+", "hydrogène"),
    ("K+", "potassium"),
    ("MnO4-", "permanganate"),
    ("F-", "fluorure"),
    ("NH4+", "ammonium"),
];

fn acid_reaction(_rng: &mut dyn RngCore) -> QuestionInstance {
    QuestionInstance::new(
        "Laquelle de ces équations correspond à la réaction entre un acide et le fer ?",
        "2 H+ + Fe → H2 + Fe2+",
        vec![
            "3 Fe + 2 O2 → Fe3O4".to_string(),
            "H+ + Fe → H2 + Fe2+".to_string(),
            "3 H+ + Fe → H2 + Fe3+".to_string(),
        ],
    )
}

// ---------------------------------------------------------------------------
// Français
// ---------------------------------------------------------------------------

const TWENTIETH_CENTURY_AUTHORS: PairedMapping = &[
    ("Aimé Césaire", "car il n'est point vrai que l'oeuvre de l'homme est finie, que nous n'avons rien à faire au monde, que nous parasitons le monde"),
    ("Apollinaire", "Hommes de l'avenir souvenez-vous de moi, Je vivais à l'époque où finissaient les rois"),
    ("Jacques Prévert", "Et pourquoi donc j'ai tué ce pauvre imbécile, Maintenant les autres vont me pourchasser en motogodille"),
    ("Robert Desnos", "J'ai tant rêvé de toi que tu perds ta réalité."),
];

const VAIR_VER_VERRE: PairedMapping = &[
    ("vair", "Désignait une fourrure blanche et grise."),
    ("ver", "Animal rampant, dont le corps est long et sans articulation."),
    ("verre", "Récipient servant à recueillir une boisson et à la boire."),
    ("vert", "Couleur qui est celle de l'herbe."),
    ("vers", "Dans un poème, désigne une ligne rythmée par le nombre de syllabes et/ou la rime."),
];

const TAN_TANT_TAON: PairedMapping = &[
    ("tan", "Écorce du chêne ou d'autres arbres."),
    ("tant", "Tellement, à tel point."),
    ("taon", "Insecte ressemblant à une grosse mouche."),
    ("temps", "Moments où se passe un mouvement, une action."),
    ("tend", "conjugaison du verbe « tendre » à la troisième personne du singulier, au présent de l'indicatif."),
];

// ---------------------------------------------------------------------------
// Géographie
// ---------------------------------------------------------------------------

const EU_INSTITUTIONS: PairedMapping = &[
    ("Parlement européen", "institution élue au suffrage universel direct, composée de 705 députés, détentrice du pouvoir législatif."),
    ("Commission européenne", "institution composée d'un représentant par État membre, dont la fonction principale est l'initiative législative."),
    ("Cour de justice de l'Union européenne", "institution qui veille à l'application du droit de l'Union."),
    ("Banque centrale européenne", "institution dont l'objectif est de maintenir la stabilité des prix et de limiter l'inflation annuelle."),
];

fn eu_membership(_rng: &mut dyn RngCore) -> QuestionInstance {
    QuestionInstance::new(
        "Lequel de ces pays est membre de l'Union européenne en 2021 ?",
        "La Slovaquie",
        vec![
            "L'Andorre".to_string(),
            "La Suisse".to_string(),
            "Le Royaume-Uni".to_string(),
        ],
    )
    .with_course([
        "Les 27 États membres de l'Union européenne en 2021 sont l'Allemagne, l'Autriche, la Belgique, la Bulgarie, Chypre, la Croatie, le Danemark, l'Espagne,",
        "l'Estonie, la Finlande, la France, la Grèce, la Hongrie, l'Irlande, l'Italie, la Lettonie, la Lituanie, le Luxembourg, Malte,",
        "les Pays-Bas, la Pologne, le Portugal, la République tchèque, la Roumanie, la Slovaquie, la Slovénie et la Suède.",
    ])
}

// ---------------------------------------------------------------------------
// Histoire
// ---------------------------------------------------------------------------

const INTERWAR: PairedMapping = &[
    ("entre 1914 et 1918", "la Première Guerre mondiale"),
    ("en 1917", "la révolution russe"),
    ("en 1936", "le Front populaire"),
    ("entre 1933 et 1945", "l'Allemagne d'Hitler"),
];

const SECOND_WORLD_WAR: PairedMapping = &[
    ("entre 1939 et 1945", "la Seconde Guerre mondiale"),
    ("entre 1944 et 1945", "la Libération, le droit de vote des femmes et la Sécurité sociale"),
    ("en 1945", "la création de l'ONU"),
    ("entre 1947 et 1991", "la guerre froide"),
];

const FIFTH_REPUBLIC: PairedMapping = &[
    ("en 1957", "les traités de Rome"),
    ("en 1958", "la naissance de la Ve République"),
    ("en juillet 1962", "l'indépendance de l'Algérie"),
    ("en décembre 1962", "l'élection du président de la République au suffrage universel direct"),
];

const LATE_TWENTIETH_CENTURY: PairedMapping = &[
    ("en 1975", "la loi Veil sur l'interruption volontaire de grossesse"),
    ("en 1981", "l'élection de François Mitterrand"),
    ("en 1989", "la chute du mur de Berlin"),
    ("en 1992", "le traité de Maastricht"),
    ("en 2002", "la mise en circulation de l'euro, monnaie européenne"),
];

// ---------------------------------------------------------------------------
// Langues
// ---------------------------------------------------------------------------

const EN_HOMOPHONES: PairedMapping = &[
    ("quel", "which"),
    ("sorcière", "witch"),
    ("souhait", "wish"),
    ("avec", "with"),
];

// ---------------------------------------------------------------------------
// Maths
// ---------------------------------------------------------------------------

fn linear_equation(rng: &mut dyn RngCore) -> QuestionInstance {
    let x = random_int(rng, -10, 10);
    let a = random_int(rng, 2, 10);
    let b = random_int(rng, 2, 10);
    let c = random_int(rng, -10, 0);
    let d = (a - c) * x + b;
    let rhs = match d {
        0 => format!("{c}x"),
        d if d < 0 => format!("{c}x - {}", -d),
        d => format!("{c}x + {d}"),
    };
    let wrong = shifted_values(rng, x, 5, 3);
    QuestionInstance::new(
        format!("Quelle est la solution de l'équation {a}x + {b} = {rhs} ?"),
        x.to_string(),
        wrong.iter().map(i64::to_string).collect(),
    )
}

fn degrees(hundredths: i64) -> String {
    format!("{}°", format_decimal(hundredths, -2))
}

fn cosine_angle(rng: &mut dyn RngCore) -> QuestionInstance {
    let adjacent = random_int(rng, 2, 10);
    let hypotenuse = random_int(rng, adjacent + 1, adjacent + 10);
    let angle = ((adjacent as f64 / hypotenuse as f64).acos().to_degrees() * 100.0).round() as i64;
    let wrong = shifted_values(rng, 0, 5, 3).into_iter().map(|d| angle + 100 * d);
    QuestionInstance::new(
        format!(
            "Dans un triangle rectangle dont l'hypoténuse mesure {hypotenuse} cm, quelle est la meilleure valeur \
             approchée d'un angle dont le côté adjacent mesure {adjacent} cm ?"
        ),
        degrees(angle),
        wrong.map(degrees).collect(),
    )
    .with_course([
        "Dans un triangle rectangle, le cosinus d'un angle aigu est égal au quotient du côté adjacent par l'hypoténuse.",
    ])
}

/// Two multiples of a common factor, `a < b`.
fn factor_pair(rng: &mut dyn RngCore) -> (i64, i64, i64) {
    let a0 = random_int(rng, 2, 5);
    let b0 = random_int(rng, a0 + 1, 30);
    let f = random_int(rng, 2, 6);
    (a0 * f, b0 * f, f)
}

fn greatest_common_divisor(rng: &mut dyn RngCore) -> QuestionInstance {
    let (a, b, f) = factor_pair(rng);
    let d = gcd(a, b);
    let wrong = near_misses(d, [b / d, a / d, f, 1, a, b], 3);
    QuestionInstance::new(
        format!("Quel est le PGCD de {a} et {b} ?"),
        d.to_string(),
        wrong.iter().map(i64::to_string).collect(),
    )
    .with_course([
        "Le PGCD de deux nombres entiers A et B est le plus grand nombre qui divise à la fois A et B.".to_string(),
        format!("Par exemple le PGCD de {a} et {b} est {d}."),
    ])
}

fn least_common_multiple(rng: &mut dyn RngCore) -> QuestionInstance {
    let (a, b, f) = factor_pair(rng);
    let m = lcm(a, b);
    let wrong = near_misses(m, [a * b / f, a * b, a, b, b / gcd(a, b)], 3);
    QuestionInstance::new(
        format!("Quel est le PPCM de {a} et {b} ?"),
        m.to_string(),
        wrong.iter().map(i64::to_string).collect(),
    )
    .with_course([
        "Le PPCM de deux nombres entiers A et B est le plus petit nombre qui est un multiple de chacun de ces nombres.".to_string(),
        format!("Par exemple le PPCM de {a} et {b} est {m}."),
    ])
}

// ---------------------------------------------------------------------------
// Physique
// ---------------------------------------------------------------------------

fn kinetic_energy(rng: &mut dyn RngCore) -> QuestionInstance {
    let mass = random_int(rng, 1, 5);
    let speed = random_int(rng, 2, 5);
    // Energies counted in half joules so ½mv² stays an integer.
    let correct = mass * speed * speed;
    let wrong = near_misses(correct, [2 * mass * speed * speed, mass * speed, 2 * mass * speed], 3);
    QuestionInstance::new(
        format!("Quelle est l'énergie cinétique d'un objet de {mass} kg se déplaçant à la vitesse de {speed} m/s ?"),
        format!("{} J", format_halves(correct)),
        wrong.iter().map(|&h| format!("{} J", format_halves(h))).collect(),
    )
    .with_course([
        "Un objet de masse m animé d'une vitesse v possède une énergie de mouvement.",
        "Elle est appelée énergie cinétique et vaut Ec = ½mv².",
    ])
}

fn electrical_power(rng: &mut dyn RngCore) -> QuestionInstance {
    let voltage = random_int(rng, 2, 10);
    let current = random_int(rng, 2, 10);
    // Half watts, for the P = UI / 2 distractor.
    let correct = 2 * voltage * current;
    let wrong = near_misses(
        correct,
        [2 * (voltage + current), voltage * current, 2 * voltage.max(current)],
        3,
    );
    QuestionInstance::new(
        format!("Quelle est la puissance d'une source électrique de tension {voltage} V et d'intensité {current} A ?"),
        format!("{} W", format_halves(correct)),
        wrong.iter().map(|&h| format!("{} W", format_halves(h))).collect(),
    )
    .with_course([
        "La puissance d'une source électrique est donnée par la formule P = U × I,",
        "où U est la tension et I l'intensité.",
    ])
}

// ---------------------------------------------------------------------------
// SVT
// ---------------------------------------------------------------------------

const GENETICS: PairedMapping = &[
    ("ADN", "molécule organique constituée de nucléotides, support de l'information génétique"),
    ("allèle", "une des différentes versions d'un gène, dues à des changements de la séquence nucléotidique"),
    ("chromosome", "ensemble d'éléments d'information liés entre eux dans une même molécule d'ADN"),
    ("gène", "séquence d'ADN située à un endroit précis d'un chromosome donné et constituant une unité d'information"),
    ("génome", "ensemble des gènes d'un organisme"),
    ("locus", "point précis du chromosome occupé par un gène donné"),
    ("mutation", "toute modification du génotype par altération de la séquence d'un fragment d'ADN"),
    ("phénotype", "ensemble des caractères observables d'un individu"),
];

pub(super) fn level() -> Level {
    Level::new(
        LEVEL_NAMES[4],
        vec![
            Field::new(
                Subject::Chimie,
                vec![
                    boxed(
                        MapQuestion::new(
                            IONS,
                            "Quel est le nom de l'ion de formule chimique %KEY ?",
                            "Quelle est la formule chimique de l'ion %VALUE ?",
                        )
                        .with_course("Quelques formules d'ions...", "%KEY est la formule de l'ion %VALUE"),
                    ),
                    boxed(acid_reaction),
                ],
            ),
            Field::new(
                Subject::Francais,
                vec![
                    boxed(
                        MapQuestion::new(
                            TWENTIETH_CENTURY_AUTHORS,
                            "Quel texte a été écrit par %KEY ?",
                            "Qui a écrit « %VALUE » ?",
                        )
                        .with_course("Quelques citations d'auteurs du XXe siècle...", "%KEY : « %VALUE »"),
                    ),
                    boxed(definition_question(VAIR_VER_VERRE)),
                    boxed(definition_question(TAN_TANT_TAON)),
                ],
            ),
            Field::new(
                Subject::Geographie,
                vec![boxed(definition_question(EU_INSTITUTIONS)), boxed(eu_membership)],
            ),
            Field::new(
                Subject::Histoire,
                vec![
                    boxed(date_question(INTERWAR)),
                    boxed(date_question(SECOND_WORLD_WAR)),
                    boxed(date_question(FIFTH_REPUBLIC)),
                    boxed(date_question(LATE_TWENTIETH_CENTURY)),
                ],
            ),
            Field::new(
                Subject::Langues,
                vec![
                    boxed(translation_question(EN_HOMOPHONES, "anglais")),
                    // no lo supieras
                    boxed(mistake_question("No hagas como si no lo sabías.", 1)),
                    // heard, were, flowers
                    boxed(mistake_question("I heared that there was only two flower in their garden.", 3)),
                ],
            ),
            Field::new(
                Subject::Maths,
                vec![
                    boxed(linear_equation),
                    boxed(cosine_angle),
                    boxed(greatest_common_divisor),
                    boxed(least_common_multiple),
                ],
            ),
            Field::new(
                Subject::Physique,
                vec![boxed(kinetic_energy), boxed(electrical_power)],
            ),
            Field::new(Subject::Svt, vec![boxed(definition_question(GENETICS))]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn linear_equation_solution_checks_out() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = linear_equation(&mut rng);
            assert!(!q.statement.contains("+ -"), "{}", q.statement);
            assert_eq!(q.wrong.len(), 3);
            assert!(!q.wrong.contains(&q.correct));
        }
    }

    #[test]
    fn gcd_and_lcm_answers_divide_and_are_multiples() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (a, b, _) = factor_pair(&mut rng);
            assert!(a < b);

            let mut rng = StdRng::seed_from_u64(seed);
            let q = greatest_common_divisor(&mut rng);
            let d: i64 = q.correct.parse().unwrap();
            assert!(a % d == 0 && b % d == 0);
            assert_eq!(q.wrong.len(), 3);
            for w in &q.wrong {
                assert!(w.parse::<i64>().unwrap() > 0, "{w}");
            }

            let mut rng = StdRng::seed_from_u64(seed);
            let q = least_common_multiple(&mut rng);
            let m: i64 = q.correct.parse().unwrap();
            assert!(m % a == 0 && m % b == 0);
            assert!(!q.wrong.contains(&q.correct));
        }
    }

    #[test]
    fn energy_and_power_distractors_are_distinct() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            for q in [kinetic_energy(&mut rng), electrical_power(&mut rng)] {
                assert_eq!(q.wrong.len(), 3);
                assert!(!q.wrong.contains(&q.correct), "{}", q.statement);
                assert!(q.wrong[0] != q.wrong[1] && q.wrong[1] != q.wrong[2] && q.wrong[0] != q.wrong[2]);
            }
        }
    }
}

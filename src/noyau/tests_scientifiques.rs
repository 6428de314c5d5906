//! Tests scientifiques (campagne) : propriétés du noyau.
//!
//! - précédence + associativité à gauche, contre une évaluation de référence
//!   (deux passes : produits/quotients, puis sommes/différences)
//! - insensibilité aux espaces
//! - idempotence
//! - quelques identités exactes sur entiers (distributivité, parenthèses neutres)
//!
//! La référence applique les mêmes opérations IEEE dans le même ordre que les deux
//! piles : l’égalité stricte des f64 est donc attendue.

use super::calculate;
use super::erreurs::ErreurCalcul;

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn pick(&mut self, n: u32) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.state >> 32) as u32) % n.max(1)
    }
}

/* ------------------------ Référence ------------------------ */

#[derive(Clone, Copy)]
enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Moins => "-",
            Op::Fois => "*",
            Op::Divise => "/",
        }
    }
}

/// Expression plate : n0 op1 n1 op2 n2 ... (diviseurs jamais nuls).
fn gen_plate(rng: &mut Rng) -> (Vec<f64>, Vec<Op>) {
    let n = 1 + rng.pick(8) as usize;
    let mut nombres = vec![gen_nombre(rng, false)];
    let mut ops = Vec::new();
    for _ in 1..n {
        let op = match rng.pick(4) {
            0 => Op::Plus,
            1 => Op::Moins,
            2 => Op::Fois,
            _ => Op::Divise,
        };
        nombres.push(gen_nombre(rng, matches!(op, Op::Divise)));
        ops.push(op);
    }
    (nombres, ops)
}

fn gen_nombre(rng: &mut Rng, non_nul: bool) -> f64 {
    let entier = rng.pick(50) as f64;
    let v = if rng.pick(3) == 0 {
        entier + 0.25 * (1 + rng.pick(3)) as f64
    } else {
        entier
    };
    if non_nul && v == 0.0 {
        1.0
    } else {
        v
    }
}

fn texte(nombres: &[f64], ops: &[Op]) -> String {
    let mut s = format!("{}", nombres[0]);
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        s.push_str(op.symbole());
        s.push_str(&format!("{n}"));
    }
    s
}

/// Passe 1 : regroupe les termes multiplicatifs (gauche à droite).
/// Passe 2 : additionne / soustrait les termes (gauche à droite).
fn reference(nombres: &[f64], ops: &[Op]) -> f64 {
    let mut termes: Vec<f64> = vec![nombres[0]];
    let mut signes: Vec<Op> = Vec::new();
    for (op, &n) in ops.iter().zip(&nombres[1..]) {
        match op {
            Op::Fois => *termes.last_mut().unwrap() *= n,
            Op::Divise => *termes.last_mut().unwrap() /= n,
            Op::Plus | Op::Moins => {
                termes.push(n);
                signes.push(*op);
            }
        }
    }

    let mut acc = termes[0];
    for (op, t) in signes.iter().zip(&termes[1..]) {
        match op {
            Op::Plus => acc += t,
            _ => acc -= t,
        }
    }
    acc
}

/// Intercale des espaces/tabulations pseudo-aléatoires entre les caractères.
fn aerer(s: &str, rng: &mut Rng) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match rng.pick(4) {
            0 => out.push(' '),
            1 => out.push_str(" \t "),
            _ => {}
        }
        out.push(c);
    }
    out
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence_contre_reference() {
    let mut rng = Rng::new(0x5EED_u64);
    for _ in 0..500 {
        let (nombres, ops) = gen_plate(&mut rng);
        let expr = texte(&nombres, &ops);
        let attendu = reference(&nombres, &ops);
        assert_eq!(calculate(&expr), Ok(attendu), "expr={expr:?}");
    }
}

#[test]
fn sci_associativite_gauche() {
    assert_eq!(calculate("10-4-3"), Ok(3.0));
    assert_eq!(calculate("100/10/5"), Ok(2.0));
    assert_eq!(calculate("12/3*2"), Ok(8.0));
    assert_eq!(calculate("10-2+3"), Ok(11.0));
}

#[test]
fn sci_parentheses_changent_l_ordre() {
    assert_eq!(calculate("10-(4-3)"), Ok(9.0));
    assert_eq!(calculate("100/(10/5)"), Ok(50.0));
    assert_eq!(calculate("(1+2)*(3+4)"), Ok(21.0));
    assert_eq!(calculate("((2+3)*(4-1))/5"), Ok(3.0));
}

#[test]
fn sci_identites_entieres() {
    let mut rng = Rng::new(0xD157_u64);
    for _ in 0..200 {
        let a = rng.pick(1000);
        let b = rng.pick(1000);
        let c = rng.pick(1000);
        // distributivité (exacte sur petits entiers)
        assert_eq!(
            calculate(&format!("{a}*({b}+{c})")),
            calculate(&format!("{a}*{b}+{a}*{c}"))
        );
        // parenthèses neutres autour d’un produit
        assert_eq!(
            calculate(&format!("{a}+{b}*{c}")),
            calculate(&format!("{a}+({b}*{c})"))
        );
    }
}

/* ------------------------ Espaces + idempotence ------------------------ */

#[test]
fn sci_insensible_aux_espaces() {
    let mut rng = Rng::new(0xE5BACE_u64);
    let cas = [
        "1.2+1*(2+1)",
        "2*3+4*(2-1)",
        "2/0",
        "1+*",
        "2(8)",
        "1)+(2",
        "(1+2)*(3+4)/7",
    ];
    for expr in cas {
        for _ in 0..10 {
            let aere = aerer(expr, &mut rng);
            assert_eq!(calculate(&aere), calculate(expr), "aere={aere:?}");
        }
    }
}

#[test]
fn sci_idempotence() {
    for expr in ["1.2 + 1 * (2 + 1)", "2/0", "&j", "", "1 + (3 * ()"] {
        let premier = calculate(expr);
        for _ in 0..5 {
            assert_eq!(calculate(expr), premier, "expr={expr:?}");
        }
    }
}

#[test]
fn sci_erreurs_classees() {
    assert_eq!(calculate(""), Err(ErreurCalcul::InvalidExpression));
    assert_eq!(calculate("1 + (3 * ()"), Err(ErreurCalcul::ExtraOpenBracket));
    assert_eq!(calculate("1+1*(2+1))"), Err(ErreurCalcul::ExtraCloseBracket));
    assert_eq!(calculate("2/0"), Err(ErreurCalcul::DivisionByZero));
    assert_eq!(calculate("&j"), Err(ErreurCalcul::UnacceptableSymbol));
    assert_eq!(calculate("2/+0"), Err(ErreurCalcul::ExtraOperator));
}

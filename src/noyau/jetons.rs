// src/noyau/jetons.rs

use super::erreurs::ErreurCalcul;

/// Opérateurs binaires reconnus. Décidés une fois pour toutes à la tokenisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    /// `+ -` = 1 ; `* /` = 2.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral décimal positif, déjà converti.
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 3.)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Les espaces sont ignorés sans couper le nombre en cours ("1 2" -> 12),
/// comme si l’appelant les avait retirés avant.
/// Tout autre caractère => UnacceptableSymbol.
/// Un littéral illisible (ex: "1.2.3", ".") ou trop grand pour un f64 => InvalidExpression.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }
        if c.is_whitespace() {
            continue;
        }

        let jeton = match c {
            '(' => Jeton::LPar,
            ')' => Jeton::RPar,
            _ => match Operateur::depuis_symbole(c) {
                Some(op) => Jeton::Op(op),
                None => return Err(ErreurCalcul::UnacceptableSymbol),
            },
        };

        vider_nombre(&mut nombre, &mut out)?;
        out.push(jeton);
    }

    vider_nombre(&mut nombre, &mut out)?;
    Ok(out)
}

/// Sort le littéral en attente (s’il y en a un) comme jeton Num.
fn vider_nombre(nombre: &mut String, out: &mut Vec<Jeton>) -> Result<(), ErreurCalcul> {
    if nombre.is_empty() {
        return Ok(());
    }
    let v: f64 = nombre
        .parse()
        .map_err(|_| ErreurCalcul::InvalidExpression)?;
    // hors de portée d’un f64 (ex: 400 chiffres) => inf, refusé aussi
    if !v.is_finite() {
        return Err(ErreurCalcul::InvalidExpression);
    }
    out.push(Jeton::Num(v));
    nombre.clear();
    Ok(())
}

/// Format utilitaire (logs / démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Jeton::Num(v) => format!("{v}"),
            Jeton::Op(op) => op.symbole().to_string(),
            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

// src/noyau/operateurs.rs
//
// Table unique des opérateurs : précédence, associativité, arité, application.
// rpn.rs (conversion) et eval.rs (évaluation) passent tous les deux par ici :
// aucun littéral '+' dupliqué entre les étages.
//
// Précédences, de la plus faible à la plus forte :
//   parenthèses / marqueurs de fonction (0) < + - (1) < % (2) < * / (3) < ^ (4) < ~ (5)
//
// NOTE: % SOUS * et / (et non au même niveau) : ordre historique du format de
// formules, conservé tel quel. Le changer altérerait silencieusement le
// résultat de formules existantes.

use super::erreurs::ErreurEval;

/// Opérateurs du langage de formules. `~` est la négation unaire, synthétisée
/// par le convertisseur (jamais tapée dans une formule).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance,
    Negation,
}

impl Op {
    /// Reconnaît un jeton opérateur (toujours un seul caractère après découpe).
    pub fn depuis_jeton(jeton: &str) -> Option<Op> {
        match jeton {
            "+" => Some(Op::Plus),
            "-" => Some(Op::Moins),
            "*" => Some(Op::Fois),
            "/" => Some(Op::Division),
            "%" => Some(Op::Modulo),
            "^" => Some(Op::Puissance),
            "~" => Some(Op::Negation),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Division => '/',
            Op::Modulo => '%',
            Op::Puissance => '^',
            Op::Negation => '~',
        }
    }

    /// Précédence entre opérateurs. Les ouvrantes et marqueurs de fonction
    /// valent 0 et servent de frontière : voir rpn.rs.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Modulo => 2,
            Op::Fois | Op::Division => 3,
            Op::Puissance => 4,
            Op::Negation => 5,
        }
    }

    /// Associatif à gauche : tous les binaires, `^` compris.
    pub fn associatif_gauche(self) -> bool {
        !matches!(self, Op::Negation)
    }

    /// Associatif à droite : `-` et `~`.
    /// `-` est dans LES DEUX camps : la règle de dépilage teste les deux
    /// clauses l'une après l'autre (voir rpn.rs).
    pub fn associatif_droite(self) -> bool {
        matches!(self, Op::Moins | Op::Negation)
    }

    pub fn arite(self) -> usize {
        match self {
            Op::Negation => 1,
            _ => 2,
        }
    }

    /// Application binaire, arithmétique 64 bits enroulante (sémantique native
    /// de l'hôte). Seule la division/le modulo par zéro est une faute.
    pub fn applique_binaire(self, gauche: i64, droite: i64) -> Result<i64, ErreurEval> {
        match self {
            Op::Plus => Ok(gauche.wrapping_add(droite)),
            Op::Moins => Ok(gauche.wrapping_sub(droite)),
            Op::Fois => Ok(gauche.wrapping_mul(droite)),
            Op::Division => {
                if droite == 0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(gauche.wrapping_div(droite))
            }
            Op::Modulo => {
                if droite == 0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(gauche.wrapping_rem(droite))
            }
            // ^ passe par le flottant puis reconvertit (troncature, saturation
            // aux bornes, NaN -> 0). Précision limitée pour les grandes
            // bases/exposants : caractéristique assumée, pas une puissance
            // entière exacte.
            Op::Puissance => Ok(((gauche as f64).powf(droite as f64)) as i64),
            Op::Negation => unreachable!("'~' n'est jamais binaire"),
        }
    }

    /// Application unaire (négation seulement).
    pub fn applique_unaire(self, valeur: i64) -> Result<i64, ErreurEval> {
        match self {
            Op::Negation => Ok(valeur.wrapping_neg()),
            autre => unreachable!("'{}' n'est jamais unaire", autre.symbole()),
        }
    }
}

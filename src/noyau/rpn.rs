// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> arbre
// Objectif:
// - Convertir la suite de jetons bruts en RPN (postfix)
// - Puis construire le Noeud racine + la liste ordonnée des variables
//
// Règles:
// - Jeton au motif entier : sortie directe.
// - Identifiant suivi d'une ouvrante => appel de fonction : un marqueur dédié
//   part sur la pile et l'ouvrante est absorbée (pas poussée séparément).
// - Tout autre identifiant => variable : sortie directe.
// - Moins unaire : un '-' en tête d'entrée, ou juste après un opérateur, une
//   ouvrante ou une virgule, est réécrit en '~'.
//
// NOTE:
// - Les ouvrantes et les marqueurs de fonction sont des FRONTIÈRES : la
//   comparaison de précédence ne tourne que tant que le sommet de pile est un
//   opérateur. Un marqueur ressort à la fermante (ou au vidage final) pour
//   être consommé par la construction d'arbre.

use std::sync::Arc;

use super::erreurs::ErreurCompile;
use super::expr::Noeud;
use super::fonctions::Registre;
use super::jetons::est_entier;
use super::operateurs::Op;

/// Jeton d'une suite RPN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JetonRpn {
    /// Fragment brut (entier ou variable), re-classé par la construction
    /// d'arbre au moment de le consommer.
    Texte(String),
    Operateur(Op),
    /// Marqueur d'appel de fonction (variant dédié : pas de sentinelle texte).
    Fonction(String),
}

/// Entrée de la pile d'opérateurs pendant la conversion.
enum Entree {
    Ouvrante,
    Operateur(Op),
    Fonction(String),
}

/// Un '-' devient une négation quand le jeton précédent force un contexte
/// de préfixe (opérateur, ouvrante ou virgule).
fn contexte_unaire(precedent: &str) -> bool {
    matches!(
        precedent,
        "+" | "-" | "*" | "/" | "^" | "%" | "~" | "(" | ","
    )
}

/// Règle de dépilage : dépiler le sommet si
/// (jeton associatif à gauche ET sa précédence <= celle du sommet) OU
/// (jeton associatif à droite ET sa précédence >  celle du sommet).
/// '-' étant dans les deux camps, les deux clauses se testent dans cet ordre.
fn doit_depiler(jeton: Op, sommet: Op) -> bool {
    let p_jeton = jeton.precedence();
    let p_sommet = sommet.precedence();

    (jeton.associatif_gauche() && p_jeton <= p_sommet)
        || (jeton.associatif_droite() && p_jeton > p_sommet)
}

/// Convertit la suite de jetons bruts en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: ["foo", "(", "1", ",", "2", ")"]
///   rpn:    [Texte("1"), Texte("2"), Fonction("foo")]
pub fn en_rpn(jetons: &[String]) -> Result<Vec<JetonRpn>, ErreurCompile> {
    let mut sortie: Vec<JetonRpn> = Vec::new();
    let mut pile: Vec<Entree> = Vec::new();

    let mut index = 0;
    while index < jetons.len() {
        let jeton = jetons[index].as_str();

        if est_entier(jeton) {
            sortie.push(JetonRpn::Texte(jeton.to_string()));
        } else if jeton == "," {
            // dépile jusqu'à une ouvrante ou un marqueur (laissés en place)
            let mut trouve = false;
            while let Some(haut) = pile.last() {
                match haut {
                    Entree::Ouvrante | Entree::Fonction(_) => {
                        trouve = true;
                        break;
                    }
                    Entree::Operateur(op) => {
                        sortie.push(JetonRpn::Operateur(*op));
                        pile.pop();
                    }
                }
            }
            if !trouve {
                return Err(ErreurCompile::ParentheseDesequilibree);
            }
        } else if jeton == "(" {
            pile.push(Entree::Ouvrante);
        } else if jeton == ")" {
            let mut trouve = false;
            while let Some(haut) = pile.pop() {
                match haut {
                    // l'ouvrante est jetée
                    Entree::Ouvrante => {
                        trouve = true;
                        break;
                    }
                    // le marqueur sort en RPN : l'arbre le consommera
                    Entree::Fonction(nom) => {
                        sortie.push(JetonRpn::Fonction(nom));
                        trouve = true;
                        break;
                    }
                    Entree::Operateur(op) => sortie.push(JetonRpn::Operateur(op)),
                }
            }
            if !trouve {
                return Err(ErreurCompile::ParentheseDesequilibree);
            }
        } else if let Some(op) = Op::depuis_jeton(jeton) {
            let op = if op == Op::Moins
                && (index == 0 || contexte_unaire(jetons[index - 1].as_str()))
            {
                Op::Negation
            } else {
                op
            };

            // frontière : on ne compare que tant que le sommet est un opérateur
            while let Some(Entree::Operateur(sommet)) = pile.last() {
                if doit_depiler(op, *sommet) {
                    sortie.push(JetonRpn::Operateur(*sommet));
                    pile.pop();
                } else {
                    break;
                }
            }
            pile.push(Entree::Operateur(op));
        } else if jetons.get(index + 1).map(String::as_str) == Some("(") {
            // appel de fonction : marqueur sur la pile, ouvrante absorbée
            pile.push(Entree::Fonction(jeton.to_string()));
            index += 1;
        } else {
            // variable : sortie directe
            sortie.push(JetonRpn::Texte(jeton.to_string()));
        }

        index += 1;
    }

    // vidage final : une ouvrante restante est une erreur de structure,
    // un marqueur restant ressort (il sera consommé par l'arbre)
    while let Some(entree) = pile.pop() {
        match entree {
            Entree::Ouvrante => return Err(ErreurCompile::ParentheseDesequilibree),
            Entree::Fonction(nom) => sortie.push(JetonRpn::Fonction(nom)),
            Entree::Operateur(op) => sortie.push(JetonRpn::Operateur(op)),
        }
    }

    Ok(sortie)
}

/// Construit l'arbre + la liste des variables distinctes à partir d'une RPN.
///
/// Le registre n'est lu que pour l'arité; les indices de variables sont
/// attribués dans l'ordre de première apparition et sont stables.
pub fn depuis_rpn(
    rpn: &[JetonRpn],
    registre: &Registre,
) -> Result<(Noeud, Vec<String>), ErreurCompile> {
    let mut pile: Vec<Noeud> = Vec::new();
    let mut variables: Vec<String> = Vec::new();

    for jeton in rpn {
        match jeton {
            JetonRpn::Operateur(Op::Negation) => {
                let enfant = pile.pop().ok_or_else(|| ErreurCompile::PileInsuffisante {
                    contexte: Op::Negation.symbole().to_string(),
                })?;
                pile.push(Noeud::Unaire(Op::Negation, Box::new(enfant)));
            }

            JetonRpn::Operateur(op) => {
                // premier dépilé = opérande DROIT (l'ordre compte pour - / %)
                let manque = || ErreurCompile::PileInsuffisante {
                    contexte: op.symbole().to_string(),
                };
                let droite = pile.pop().ok_or_else(manque)?;
                let gauche = pile.pop().ok_or_else(manque)?;
                pile.push(Noeud::Binaire(*op, Box::new(gauche), Box::new(droite)));
            }

            JetonRpn::Fonction(nom) => {
                let fonction = registre
                    .cherche(nom)
                    .ok_or_else(|| ErreurCompile::FonctionInconnue { nom: nom.clone() })?;

                let attendu = fonction.arite();
                if pile.len() < attendu {
                    return Err(ErreurCompile::AriteIncorrecte {
                        nom: nom.clone(),
                        attendu,
                        disponible: pile.len(),
                    });
                }

                // dernier dépilé = premier argument : la queue de pile est
                // déjà dans l'ordre des arguments
                let enfants = pile.split_off(pile.len() - attendu);
                pile.push(Noeud::Fonction(Arc::clone(fonction), enfants));
            }

            JetonRpn::Texte(texte) if est_entier(texte) => {
                let valeur = texte.parse::<i64>().map_err(|_| {
                    ErreurCompile::LitteralHorsLimites {
                        jeton: texte.clone(),
                    }
                })?;
                pile.push(Noeud::Valeur(valeur));
            }

            JetonRpn::Texte(texte) => {
                // variable : indice stable, premier-vu premier-servi
                let indice = match variables.iter().position(|v| v == texte) {
                    Some(i) => i,
                    None => {
                        variables.push(texte.clone());
                        variables.len() - 1
                    }
                };
                pile.push(Noeud::Variable(indice));
            }
        }
    }

    match pile.pop() {
        Some(racine) if pile.is_empty() => Ok((racine, variables)),
        Some(_) => Err(ErreurCompile::ExpressionMalFormee {
            restants: pile.len() + 1,
        }),
        None => Err(ErreurCompile::ExpressionMalFormee { restants: 0 }),
    }
}

/// Format utilitaire (debug/traces) : suite RPN en texte.
pub fn format_rpn(rpn: &[JetonRpn]) -> String {
    let mut morceaux = Vec::with_capacity(rpn.len());
    for jeton in rpn {
        let s = match jeton {
            JetonRpn::Texte(t) => t.clone(),
            JetonRpn::Operateur(op) => op.symbole().to_string(),
            JetonRpn::Fonction(nom) => format!("{nom}()"),
        };
        morceaux.push(s);
    }
    morceaux.join(" ")
}

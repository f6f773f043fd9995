//! Tests de propriétés (campagne) : précédences, associativités, invariants.
//!
//! Les résultats attendus sont calculés à la main sous les règles du langage
//! de formules :
//! - + - < % < * / < ^ < ~ (oui, % SOUS * et / : ordre historique)
//! - binaires associatifs à gauche, `^` compris
//! - moins unaire en tête, après opérateur, ouvrante ou virgule
//! - arithmétique 64 bits enroulante; / et % tronquent vers zéro
//! - ^ passe par le flottant puis tronque

use super::compile::{compile_expression, Compilation};
use super::erreurs::{ErreurCompile, ErreurEval};
use super::fonctions::{Fonction, Registre};

fn registre_essai() -> Registre {
    let mut registre = Registre::nouveau();
    registre.inscrit(Fonction::nouvelle("foo", 2, |args| Ok(args[0] + args[1])));
    registre.inscrit(Fonction::nouvelle("double", 1, |args| Ok(args[0] * 2)));
    registre.inscrit(Fonction::nouvelle("max", 2, |args| {
        Ok(args[0].max(args[1]))
    }));
    registre
}

fn compile_ok(formule: &str) -> Compilation {
    compile_expression(formule, &registre_essai())
        .unwrap_or_else(|e| panic!("compile({formule:?}) erreur: {e}"))
}

fn eval_ok(formule: &str, valeurs: &[i64]) -> i64 {
    compile_ok(formule)
        .evalue(valeurs)
        .unwrap_or_else(|e| panic!("evalue({formule:?}) faute: {e}"))
}

fn assert_eval(formule: &str, attendu: i64) {
    let obtenu = eval_ok(formule, &[]);
    assert_eq!(obtenu, attendu, "formule={formule:?}");
}

/* ------------------------ Précédences ------------------------ */

#[test]
fn prop_precedence_fois_sur_plus() {
    assert_eval("1+2*3", 7);
    assert_eval("2*3+1", 7);
    assert_eval("(1+2)*3", 9);
}

#[test]
fn prop_precedence_puissance_sur_fois() {
    assert_eval("2*3^2", 18);
    assert_eval("3^2*2", 18);
    assert_eval("(2*3)^2", 36);
}

#[test]
fn prop_modulo_sous_fois_et_division() {
    // % plus faible que * et / : a%b*c groupe en a%(b*c)
    assert_eval("10%3*2", 4); // 10%(3*2) = 4, PAS (10%3)*2 = 2
    assert_eval("2*10%4", 0); // (2*10)%4 = 0
    assert_eval("20%12/2", 2); // 20%(12/2) = 20%6 = 2
    // mais plus fort que + et -
    assert_eval("1+10%3", 2); // 1+(10%3)
    assert_eval("10%3+1", 2);
}

/* ------------------------ Associativités ------------------------ */

#[test]
fn prop_binaires_associatifs_a_gauche() {
    assert_eval("10-3-2", 5); // (10-3)-2, pas 10-(3-2)=9
    assert_eval("100/10/2", 5); // (100/10)/2
    assert_eval("7-(3-2)", 6);
    assert_eval("100%7%5", 2); // (100%7)%5 = 2%5 = 2
}

#[test]
fn prop_puissance_associative_a_gauche() {
    // contrairement à l'usage mathématique : (2^3)^2 = 64, pas 2^(3^2) = 512
    assert_eval("2^3^2", 64);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn prop_moins_unaire() {
    assert_eval("-5+3", -2);
    assert_eval("-5*3", -15); // (-5)*3 : ~ sort avant *
    assert_eval("-(1+2)", -3);
    assert_eval("(-5)", -5);
}

#[test]
fn prop_moins_unaire_colle_a_un_binaire_refuse() {
    // '~' (précédence 5) dépile les opérateurs plus faibles avant de se
    // poser : "3--2" vide la pile trop tôt et échoue. Comportement
    // historique conservé : écrire "3-(-2)" ou "3-(0-2)".
    let registre = registre_essai();
    assert_eq!(
        compile_expression("3--2", &registre).unwrap_err(),
        ErreurCompile::PileInsuffisante {
            contexte: "-".to_string()
        }
    );
    assert_eval("3-(-2)", 5);
}

#[test]
fn prop_moins_unaire_dans_un_appel() {
    assert_eval("foo(-1,2)", 1);
    assert_eval("foo(1,-2)", -1);
}

/* ------------------------ Sémantique numérique ------------------------ */

#[test]
fn prop_division_tronque_vers_zero() {
    assert_eval("7/2", 3);
    assert_eval("(0-7)/2", -3);
    assert_eval("7%2", 1);
    assert_eval("(0-7)%2", -1);
}

#[test]
fn prop_puissance_flottante_tronquee() {
    assert_eval("2^10", 1024);
    assert_eval("5^0", 1);
    // 2^62 reste exactement représentable en f64
    assert_eval("2^62", 4_611_686_018_427_387_904);
    // exposant négatif : 0.5 tronqué à 0
    assert_eval("2^(0-1)", 0);
}

/* ------------------------ Variables ------------------------ */

#[test]
fn prop_indices_premier_vu_premier_servi() {
    let compilation = compile_ok("b+a+b*a");
    assert_eq!(compilation.variables(), ["b", "a"]);
    // b=10, a=3 : 10+3+10*3 = 43
    assert_eq!(compilation.evalue(&[10, 3]).unwrap(), 43);
}

#[test]
fn prop_variable_repetee_un_seul_indice() {
    let compilation = compile_ok("x+x+x");
    assert_eq!(compilation.variables().len(), 1);
    assert_eq!(compilation.evalue(&[4]).unwrap(), 12);
}

#[test]
fn prop_variables_dans_les_appels() {
    let compilation = compile_ok("foo(x,y)+x");
    assert_eq!(compilation.variables(), ["x", "y"]);
    assert_eq!(compilation.evalue(&[1, 2]).unwrap(), 4);
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn prop_appels_imbriques() {
    // double(1) = 2, foo(2, 2) = 4
    assert_eval("foo(double(1),2)", 4);
    assert_eval("max(double(3),foo(1,2))", 6);
}

#[test]
fn prop_appel_dans_une_expression() {
    assert_eval("1+foo(2,3)*2", 11);
}

/* ------------------------ Idempotence / déterminisme ------------------------ */

#[test]
fn prop_idempotence_structurelle() {
    let premiere = compile_ok("foo(x,2)*y-3");
    let seconde = compile_ok("foo(x,2)*y-3");
    assert_eq!(premiere, seconde);
    assert_eq!(premiere.variables(), seconde.variables());
}

#[test]
fn prop_erreur_deterministe() {
    let registre = registre_essai();
    let premiere = compile_expression("1+", &registre).unwrap_err();
    let seconde = compile_expression("1+", &registre).unwrap_err();
    assert_eq!(premiere, seconde);
}

/* ------------------------ Taxonomie d'erreurs ------------------------ */

#[test]
fn prop_chaque_variante_d_erreur() {
    let registre = registre_essai();

    assert_eq!(
        compile_expression("1+2$", &registre).unwrap_err(),
        ErreurCompile::CaractereInvalide {
            position: 3,
            caractere: '$'
        }
    );
    assert_eq!(
        compile_expression("(1+2", &registre).unwrap_err(),
        ErreurCompile::ParentheseDesequilibree
    );
    assert_eq!(
        compile_expression("1+2)", &registre).unwrap_err(),
        ErreurCompile::ParentheseDesequilibree
    );
    assert_eq!(
        compile_expression("1+", &registre).unwrap_err(),
        ErreurCompile::PileInsuffisante {
            contexte: "+".to_string()
        }
    );
    assert_eq!(
        compile_expression("inconnue(1)", &registre).unwrap_err(),
        ErreurCompile::FonctionInconnue {
            nom: "inconnue".to_string()
        }
    );
    assert_eq!(
        compile_expression("foo(1)", &registre).unwrap_err(),
        ErreurCompile::AriteIncorrecte {
            nom: "foo".to_string(),
            attendu: 2,
            disponible: 1
        }
    );
    assert_eq!(
        compile_expression("99999999999999999999", &registre).unwrap_err(),
        ErreurCompile::LitteralHorsLimites {
            jeton: "99999999999999999999".to_string()
        }
    );
    assert_eq!(
        compile_expression("", &registre).unwrap_err(),
        ErreurCompile::ExpressionMalFormee { restants: 0 }
    );
    assert_eq!(
        compile_expression("(1)(2)", &registre).unwrap_err(),
        ErreurCompile::ExpressionMalFormee { restants: 2 }
    );
}

#[test]
fn prop_fautes_d_evaluation_separees() {
    // la compilation passe, seule l'évaluation échoue
    let compilation = compile_ok("1/x");
    assert_eq!(compilation.evalue(&[0]), Err(ErreurEval::DivisionParZero));

    let compilation = compile_ok("1%x");
    assert_eq!(compilation.evalue(&[0]), Err(ErreurEval::DivisionParZero));

    // liaisons trop courtes : faute, pas de panique
    let compilation = compile_ok("x+y");
    assert_eq!(
        compilation.evalue(&[1]),
        Err(ErreurEval::VariableSansValeur { indice: 1 })
    );
}

/* ------------------------ Partage entre lecteurs ------------------------ */

#[test]
fn prop_arbre_partage_entre_threads() {
    use std::sync::Arc;

    let compilation = Arc::new(compile_ok("foo(x,2)*x"));

    let mut poignees = Vec::new();
    for k in 0..4i64 {
        let partage = Arc::clone(&compilation);
        poignees.push(std::thread::spawn(move || {
            partage.evalue(&[k]).unwrap()
        }));
    }

    for (k, poignee) in poignees.into_iter().enumerate() {
        let k = k as i64;
        // foo(k,2)*k = (k+2)*k
        assert_eq!(poignee.join().unwrap(), (k + 2) * k);
    }
}

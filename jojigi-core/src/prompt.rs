//! Prompt composition for prank recommendations

use crate::types::{Language, PromptRequest, target_label};

/// Build the instruction sent to the model for `request`
pub fn build_prompt(request: &PromptRequest) -> String {
    let lang = request.language;
    let target = target_label(&request.target, lang);
    let style = request.style.description(lang);
    let intensity = request.intensity.description(lang);

    match lang {
        Language::Ko => format!(
            "너는 세상에서 가장 창의적이고 무해한 장난을 설계하는 '조지기 마스터'야.\n\
             20대 사용자가 '{target}'에게 할 수 있는 '킹받지만 웃음 터지는' 장난을 하나 추천해줘.\n\n\
             장난 스타일: {style}\n\
             장난 강도: {intensity}\n\n\
             아래 형식을 꼭 지켜줘:\n\
             1. 작전명: 재치 있는 작전 이름\n\
             2. 준비물: 필요한 물건 목록\n\
             3. 실행 단계: 순서대로 따라 할 수 있는 단계별 설명\n\
             4. 예상 반응 & 대처법: 상대의 예상 반응과 그에 맞는 대처법\n\
             5. 걸렸을 때의 변명: 들켰을 때 써먹을 변명\n\n\
             주의: 신체적 위해, 불법 행위, 심각한 괴롭힘이 될 수 있는 장난은 절대 추천하지 마.\n\
             말투는 장난끼 넘치고 친근한 반말로, 반드시 한국어로 답해줘."
        ),
        Language::En => format!(
            "You are the 'Prank Master', the world's most creative designer of harmless pranks.\n\
             Recommend one prank that a user in their 20s can pull on their {target}: \
             annoying in the best way, and guaranteed to end in laughter.\n\n\
             Prank style: {style}\n\
             Prank intensity: {intensity}\n\n\
             Always use this format:\n\
             1. Operation name: a witty code name for the prank\n\
             2. Preparation: a list of what you need\n\
             3. Execution: step-by-step instructions\n\
             4. Expected reaction & countermeasure: how they will react and how to handle it\n\
             5. Excuse if caught: what to say when you get busted\n\n\
             Important: never suggest anything involving physical harm, illegal acts, \
             or serious bullying.\n\
             Keep the tone playful and friendly, and answer in English."
        ),
    }
}

//! Prompt templates.
//!
//! Both builders are pure string composition; callers cache the finished
//! insight, never the prompt.

/// Shared analyst prompt: one concrete recommendation, at most 30 words,
/// grounded only in the supplied data, Mauritanian retail context.
pub fn analyst_prompt(data_context: &str) -> String {
    format!(
        "\nأنت مساعد ذكاء اصطناعي متخصص في التحليل المالي والمحاسبي وإدارة المتاجر، وتركّز على محلات الملابس في موريتانيا.\n\n\
مهمتك هي تحليل كل البيانات الظاهرة أمامك في الصفحة المرسلة لك، سواء كانت تتعلق بالمبيعات، المصاريف، المخزون، الموردين، الديون، الربح، أو حركة المنتجات.\n\
قم بفهم السياق الكامل كما لو أنك محلل مالي داخل متجر فعلي.\n\n\
البيانات للتحليل:\n{data_context}\n\n\
يجب عليك:\n\
1. تحليل كل الأرقام الموجودة بعمق، واكتشاف أي نمط أو مشكلة أو فرصة.\n\
2. تقديم توصية واحدة فقط، جوهرية، عملية، ومباشرة، وليست عامة أو نظرية.\n\
3. إذا وُجد خطأ أو خلل في البيانات أو تناقض، قم بالتنبيه عليه بوضوح.\n\
4. توقع التغيّرات المحتملة بناءً على البيانات.\n\
5. تقديم نصيحة قابلة للتطبيق فورًا داخل المتجر.\n\
6. أن تكون مختصرًا جدًا وواضحًا، بدون مقدمات، وبدون شرح طويل.\n\
7. أن تكون النصيحة مبنية على البيانات المعروضة فقط.\n\
8. عدم إرجاع أي صياغة عامة مثل \"راقب المبيعات\" أو \"حسّن الإدارة\".\n\
9. مراعاة واقع السوق الموريتاني.\n\n\
صيغة الرد يجب أن تكون:\n\
- جملة واحدة مركزة.\n\
- لا تتجاوز 30 كلمة كحد أقصى.\n\
- لا تسأل المستخدم أسئلة، فقط قدّم أفضل تحليل ممكن بناءً على البيانات.\n"
    )
}

/// Stricter dashboard prompt: cash-flow strategist persona, exactly three
/// short bullet decisions.
pub fn dashboard_prompt(data_context: &str) -> String {
    format!(
        "\nأنت خبير استراتيجي في إدارة \"السيولة المالية\" (Cash Flow) لمتاجر التجزئة في موريتانيا.\n\
هدفك الوحيد: مساعدة التاجر على تحويل البضاعة إلى \"كاش\" بأسرع وقت وزيادة الربحية.\n\n\
البيانات المالية الحالية:\n{data_context}\n\n\
المطلوب:\n\
أعطني 3 \"قرارات إدارية\" صارمة ومختصرة جداً (Bullet points) لزيادة السيولة هذا الأسبوع.\n\n\
الشروط:\n\
1. ركز على تسييل البضاعة الراكدة (تخفيضات، عروض حزمة).\n\
2. نبه فوراً إذا كان هناك رأس مال كبير مجمد.\n\
3. لا تستخدم عبارات عامة مثل \"حسن التسويق\". أريد إجراءات مالية.\n\
4. كن مباشراً وحازماً.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyst_prompt_embeds_context_verbatim() {
        let context = r#"{"total_clients":3,"total_outstanding_debt":4500}"#;
        let prompt = analyst_prompt(context);
        assert!(prompt.contains(context));
        assert!(prompt.contains("30 كلمة"));
        assert!(prompt.contains("موريتانيا"));
    }

    #[test]
    fn dashboard_prompt_requests_three_decisions() {
        let prompt = dashboard_prompt("تقرير السيولة");
        assert!(prompt.contains("تقرير السيولة"));
        assert!(prompt.contains("3 \"قرارات إدارية\""));
    }

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(analyst_prompt("س"), analyst_prompt("س"));
        assert_eq!(dashboard_prompt("س"), dashboard_prompt("س"));
    }
}

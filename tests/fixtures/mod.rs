//! Work24-shaped XML payloads.

/// Listing page with two postings.
pub const LIST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<dhsOpenEmpInfoList>
    <total>2</total>
    <startPage>1</startPage>
    <display>20</display>
    <dhsOpenEmpInfo>
        <empSeqno>E2026001</empSeqno>
        <empWantedTitle>2026년 상반기 신입사원 채용</empWantedTitle>
        <empBusiNm>한빛전자</empBusiNm>
        <coClcdNm>대기업</coClcdNm>
        <empWantedStdt>20260301</empWantedStdt>
        <empWantedEndt>20260320</empWantedEndt>
        <empWantedTypeNm>정규직</empWantedTypeNm>
        <regLogImgNm>https://example.invalid/logo1.png</regLogImgNm>
        <empWantedHomepgDetail>https://example.invalid/jobs/1</empWantedHomepgDetail>
        <empWantedMobileUrl>https://m.example.invalid/jobs/1</empWantedMobileUrl>
    </dhsOpenEmpInfo>
    <dhsOpenEmpInfo>
        <empSeqno>E2026002</empSeqno>
        <empWantedTitle>생산직 경력 채용</empWantedTitle>
        <empBusiNm>누리정밀</empBusiNm>
        <empWantedStdt>20260305</empWantedStdt>
        <empWantedEndt>20260331</empWantedEndt>
        <empWantedTypeNm>계약직</empWantedTypeNm>
        <regLogImgNm/>
        <empWantedWorkRegionNm>경기 화성시 향남읍</empWantedWorkRegionNm>
    </dhsOpenEmpInfo>
</dhsOpenEmpInfoList>"#;

/// Listing page with no rows.
pub const EMPTY_LIST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<dhsOpenEmpInfoList>
    <total>0</total>
    <startPage>1</startPage>
    <display>20</display>
</dhsOpenEmpInfoList>"#;

/// Detail of E2026001 with three recruitment sections and two selection steps.
pub const DETAIL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<dhsOpenEmpInfoDetailRoot>
    <empSeqno>E2026001</empSeqno>
    <empWantedTitle>2026년 상반기 신입사원 채용</empWantedTitle>
    <empBusiNm>한빛전자</empBusiNm>
    <coClcdNm>대기업</coClcdNm>
    <empWantedStdt>20260301</empWantedStdt>
    <empWantedEndt>20260320</empWantedEndt>
    <empWantedTypeNm>정규직</empWantedTypeNm>
    <empSubmitDocCont>이력서, 자기소개서</empSubmitDocCont>
    <empRcptMthdCont>홈페이지 접수</empRcptMthdCont>
    <empAcptPsnAnncCont>개별 통보</empAcptPsnAnncCont>
    <inqryCont>인사팀 02-000-0000</inqryCont>
    <empWantedHomepg>https://example.invalid</empWantedHomepg>
    <empnRecrSummaryCont>연구개발 및 생산관리 신입 채용</empnRecrSummaryCont>
    <recrCommCont>해외여행에 결격사유가 없는 자</recrCommCont>
    <empRecrList>
        <empRecrListInfo>
            <empRecrNm>연구개발</empRecrNm>
            <jobCont>제품 연구개발</jobCont>
            <workRegionNm>서울특별시 서초구</workRegionNm>
            <empWantedCareerNm>신입</empWantedCareerNm>
            <empWantedEduNm>대졸</empWantedEduNm>
            <recrPsncnt>10</recrPsncnt>
        </empRecrListInfo>
        <empRecrListInfo>
            <empRecrNm>연구개발(소프트웨어)</empRecrNm>
            <workRegionNm>서울특별시 서초구</workRegionNm>
        </empRecrListInfo>
        <empRecrListInfo>
            <empRecrNm>생산관리</empRecrNm>
            <workRegionNm>경상북도 구미시</workRegionNm>
        </empRecrListInfo>
    </empRecrList>
    <empSelsList>
        <empSelsListInfo>
            <selsNm>서류전형</selsNm>
            <selsSchdCont>3월 중</selsSchdCont>
            <empSelfintroList>
                <empSelfintroListInfo>
                    <selfintroQstCont>지원 동기와 입사 후 포부를 기술하시오.</selfintroQstCont>
                </empSelfintroListInfo>
                <empSelfintroListInfo>
                    <selfintroQstCont>가장 도전적이었던 경험을 기술하시오.</selfintroQstCont>
                </empSelfintroListInfo>
            </empSelfintroList>
        </empSelsListInfo>
        <empSelsListInfo>
            <selsNm>면접전형</selsNm>
            <selsCont>직무면접 및 인성면접</selsCont>
            <empSelfintroList>
                <empSelfintroListInfo>
                    <selfintroQstCont>지원 동기와 입사 후 포부를 기술하시오.</selfintroQstCont>
                </empSelfintroListInfo>
            </empSelfintroList>
        </empSelsListInfo>
    </empSelsList>
</dhsOpenEmpInfoDetailRoot>"#;

/// What Work24 sends back for an unknown posting id.
pub const DETAIL_MISSING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<error>
    <messageCd>006</messageCd>
    <message>해당 구인인증번호가 존재하지 않습니다.</message>
</error>"#;
